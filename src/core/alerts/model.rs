// Alert request and identity types.

use std::fmt;

/// Callback run with the label of the tapped (non-cancel) button
pub type Completion = Box<dyn FnOnce(&str) + Send + 'static>;

/// Opaque handle for a live dialog, handed to the presenter and
/// reported back on dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertHandle(u64);

impl AlertHandle {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert#{}", self.0)
    }
}

/// Deduplication key: the title if non-empty, otherwise the message.
/// Two alerts with the same text are the same alert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AlertIdentifier(String);

impl AlertIdentifier {
    pub fn from_parts(title: Option<&str>, message: Option<&str>) -> Self {
        let text = match title {
            Some(title) if !title.is_empty() => title,
            _ => message.unwrap_or_default(),
        };
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// A single request to display an alert
pub struct AlertRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub cancel_label: String,
    /// Labels shown after the cancel button, in order
    pub other_labels: Vec<String>,
    pub completion: Option<Completion>,
    /// Skip duplicate suppression for this request
    pub always_display: bool,
}

impl AlertRequest {
    /// Information-only alert: a single cancel button, no callback
    pub fn information(
        title: impl Into<String>,
        message: impl Into<String>,
        cancel_label: impl Into<String>,
    ) -> Self {
        Self {
            title: non_empty(title.into()),
            message: non_empty(message.into()),
            cancel_label: cancel_label.into(),
            other_labels: Vec::new(),
            completion: None,
            always_display: false,
        }
    }

    /// Action alert: cancel plus `other_labels`, `completion` runs for
    /// any non-cancel tap
    pub fn action<F>(
        title: impl Into<String>,
        message: impl Into<String>,
        cancel_label: impl Into<String>,
        other_labels: Vec<String>,
        completion: F,
    ) -> Self
    where
        F: FnOnce(&str) + Send + 'static,
    {
        Self {
            other_labels,
            completion: Some(Box::new(completion)),
            ..Self::information(title, message, cancel_label)
        }
    }

    pub fn always_display(mut self, always_display: bool) -> Self {
        self.always_display = always_display;
        self
    }

    pub fn identifier(&self) -> AlertIdentifier {
        AlertIdentifier::from_parts(self.title.as_deref(), self.message.as_deref())
    }

    /// An information alert carries neither a callback nor extra buttons
    pub fn is_information(&self) -> bool {
        self.completion.is_none() && self.other_labels.is_empty()
    }
}

impl fmt::Debug for AlertRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertRequest")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("cancel_label", &self.cancel_label)
            .field("other_labels", &self.other_labels)
            .field("completion", &self.completion.is_some())
            .field("always_display", &self.always_display)
            .finish()
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// What happened when a dialog was dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DismissOutcome {
    /// Cancel button tapped; no callback
    Cancelled,
    /// Information alert closed; never calls back
    Acknowledged,
    /// Non-cancel button tapped; carries its label
    Selected(String),
    /// Toolkit reported a button index the dialog never had
    IndexOutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DismissError {
    #[error("no live alert for {0}")]
    UnknownHandle(AlertHandle),
}
