use serde::{Deserialize, Serialize};

/// Alert manager settings.
/// Meant to be embedded in the host application's own settings file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AlertSettings {
    /// When false, every request is admitted as if `always_display` were set
    #[serde(default = "default_suppress_duplicates")]
    pub suppress_duplicates: bool,
    /// Cancel button label used when a caller passes an empty one
    #[serde(default = "default_cancel_label")]
    pub default_cancel_label: String,
}

fn default_suppress_duplicates() -> bool {
    true
}

fn default_cancel_label() -> String {
    "OK".to_string()
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            suppress_duplicates: default_suppress_duplicates(),
            default_cancel_label: default_cancel_label(),
        }
    }
}

impl AlertSettings {
    /// Resolve the cancel label for a request, falling back to the default
    pub fn cancel_label_or_default(&self, label: &str) -> String {
        if label.is_empty() {
            self.default_cancel_label.clone()
        } else {
            label.to_string()
        }
    }
}
