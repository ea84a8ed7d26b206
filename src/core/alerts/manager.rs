// Alert manager - admits requests, hands them to the presenter and routes
// each dismissal back to the caller's completion.

use std::collections::HashMap;

use log::{debug, warn};

use super::model::{
    AlertHandle, AlertIdentifier, AlertRequest, Completion, DismissError, DismissOutcome,
};
use super::presenter::{AlertPresenter, LogPresenter, Presentation};
use super::tracker::ActiveAlerts;
use crate::core::config::AlertSettings;

/// Completion and button labels waiting for an action alert's dismissal
struct PendingCallback {
    completion: Option<Completion>,
    /// Labels after the cancel button, in display order
    other_labels: Vec<String>,
}

/// Bookkeeping for one dialog on screen
struct LiveAlert {
    identifier: AlertIdentifier,
    /// None for information alerts
    callback: Option<PendingCallback>,
}

/// Resolved dismissal whose completion has not run yet
pub(crate) struct Resolved {
    pub outcome: DismissOutcome,
    pub completion: Option<Completion>,
}

impl Resolved {
    pub fn run(self) -> DismissOutcome {
        if let (DismissOutcome::Selected(label), Some(completion)) =
            (&self.outcome, self.completion)
        {
            completion(label);
        }
        self.outcome
    }
}

pub struct AlertManager {
    settings: AlertSettings,
    active: ActiveAlerts,
    live: HashMap<AlertHandle, LiveAlert>,
    presenter: Box<dyn AlertPresenter>,
    next_handle: u64,
}

impl AlertManager {
    pub fn new(settings: AlertSettings, presenter: impl AlertPresenter + 'static) -> Self {
        Self {
            settings,
            active: ActiveAlerts::new(),
            live: HashMap::new(),
            presenter: Box::new(presenter),
            next_handle: 1,
        }
    }

    /// Manager with default settings and no presenter attached.
    /// Requests are logged and dropped until `set_presenter` is called.
    pub fn headless() -> Self {
        Self::new(AlertSettings::default(), LogPresenter)
    }

    /// Swap the presentation backend. Dialogs already shown stay tracked.
    pub fn set_presenter(&mut self, presenter: impl AlertPresenter + 'static) {
        self.presenter = Box::new(presenter);
    }

    /// Update settings (hot-reload friendly)
    pub fn update_settings(&mut self, settings: AlertSettings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> &AlertSettings {
        &self.settings
    }

    /// Show an information-only alert with a single cancel button
    pub fn show_information_alert(
        &mut self,
        title: &str,
        message: &str,
        always_display: bool,
        cancel_label: &str,
    ) {
        let request = AlertRequest::information(title, message, cancel_label);
        self.show(request.always_display(always_display));
    }

    /// Show an alert with extra buttons. `completion` runs with the tapped
    /// label when any button other than cancel is chosen.
    pub fn show_action_alert(
        &mut self,
        title: &str,
        message: &str,
        completion: Option<Completion>,
        always_display: bool,
        cancel_label: &str,
        other_labels: Vec<String>,
    ) {
        let mut request = AlertRequest::information(title, message, cancel_label)
            .always_display(always_display);
        request.completion = completion;
        request.other_labels = other_labels;
        self.show(request);
    }

    /// Present a request unless a duplicate is already on screen.
    /// Suppression is silent. A request the presenter fails to show is
    /// forgotten, so it does not block later duplicates.
    pub fn show(&mut self, request: AlertRequest) {
        let identifier = request.identifier();
        let always_display = request.always_display || !self.settings.suppress_duplicates;
        if !self.active.admit(&identifier, always_display) {
            return;
        }

        let handle = AlertHandle::new(self.next_handle);
        self.next_handle += 1;

        let callback = if request.is_information() {
            None
        } else {
            Some(PendingCallback {
                completion: request.completion,
                other_labels: request.other_labels.clone(),
            })
        };

        let mut buttons = Vec::with_capacity(request.other_labels.len() + 1);
        buttons.push(self.settings.cancel_label_or_default(&request.cancel_label));
        buttons.extend(request.other_labels);

        let presentation = Presentation {
            handle,
            title: request.title,
            message: request.message,
            buttons,
        };
        match self.presenter.present(presentation) {
            Ok(()) => {
                debug!("Presented {} as {}", identifier, handle);
                self.live.insert(
                    handle,
                    LiveAlert {
                        identifier,
                        callback,
                    },
                );
            }
            Err(e) => {
                warn!("Alert {} not presented: {}", identifier, e);
                self.active.release(&identifier);
            }
        }
    }

    /// Handle the toolkit's dismissal event for `handle`.
    /// `index` 0 is the cancel button, later indices follow the other labels.
    pub fn dismiss(
        &mut self,
        handle: AlertHandle,
        index: usize,
    ) -> Result<DismissOutcome, DismissError> {
        self.resolve(handle, index).map(Resolved::run)
    }

    /// Release the dialog and work out what to call, without calling it
    pub(crate) fn resolve(
        &mut self,
        handle: AlertHandle,
        index: usize,
    ) -> Result<Resolved, DismissError> {
        let live = self.live.remove(&handle).ok_or_else(|| {
            warn!("Dismissal for unknown {} (index {})", handle, index);
            DismissError::UnknownHandle(handle)
        })?;
        self.active.release(&live.identifier);

        let Some(callback) = live.callback else {
            if index != Presentation::CANCEL_INDEX {
                warn!(
                    "{} dismissed with out-of-range button index {}",
                    handle, index
                );
            }
            return Ok(Resolved {
                outcome: DismissOutcome::Acknowledged,
                completion: None,
            });
        };

        if index == Presentation::CANCEL_INDEX {
            return Ok(Resolved {
                outcome: DismissOutcome::Cancelled,
                completion: None,
            });
        }

        match callback.other_labels.into_iter().nth(index - 1) {
            Some(label) => Ok(Resolved {
                outcome: DismissOutcome::Selected(label),
                completion: callback.completion,
            }),
            None => {
                warn!(
                    "{} dismissed with out-of-range button index {}",
                    handle, index
                );
                Ok(Resolved {
                    outcome: DismissOutcome::IndexOutOfRange(index),
                    completion: None,
                })
            }
        }
    }

    /// Whether an alert with this title/message is currently on screen
    pub fn is_displaying(&self, title: Option<&str>, message: Option<&str>) -> bool {
        let identifier = AlertIdentifier::from_parts(title, message);
        self.active.is_active(&identifier)
    }

    /// Number of dialogs on screen
    pub fn active_count(&self) -> usize {
        self.active.total()
    }

    /// Number of action alerts still waiting for a dismissal
    pub fn pending_count(&self) -> usize {
        self.live
            .values()
            .filter(|live| live.callback.is_some())
            .count()
    }
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::headless()
    }
}
