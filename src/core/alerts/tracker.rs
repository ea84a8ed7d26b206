// Tracks identifiers of the alerts currently on screen.
//
// Membership is counted: always-display alerts may put the same identifier
// on screen several times, and each dismissal releases exactly one of them.

use std::collections::HashMap;

use log::debug;

use super::model::AlertIdentifier;

#[derive(Debug, Default)]
pub struct ActiveAlerts {
    counts: HashMap<AlertIdentifier, usize>,
}

impl ActiveAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether an alert may be shown.
    /// Every admitted identifier is counted, including always-display ones.
    pub fn admit(&mut self, identifier: &AlertIdentifier, always_display: bool) -> bool {
        if !always_display && self.is_active(identifier) {
            debug!("Suppressing duplicate alert {}", identifier);
            return false;
        }

        *self.counts.entry(identifier.clone()).or_insert(0) += 1;
        true
    }

    /// Remove one occurrence. Returns false if the identifier was not active.
    pub fn release(&mut self, identifier: &AlertIdentifier) -> bool {
        match self.counts.get_mut(identifier) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(identifier);
                debug!("Alert {} no longer on screen", identifier);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, identifier: &AlertIdentifier) -> bool {
        self.counts.contains_key(identifier)
    }

    pub fn count(&self, identifier: &AlertIdentifier) -> usize {
        self.counts.get(identifier).copied().unwrap_or(0)
    }

    /// Number of distinct identifiers on screen
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Number of live occurrences across all identifiers
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
