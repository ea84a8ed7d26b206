// Process-wide alert manager.
//
// Created on first use and never torn down. Callers are expected to stay on
// the UI thread; the mutex only makes the instance shareable as a static.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

use super::manager::AlertManager;
use super::model::{AlertHandle, AlertRequest, Completion, DismissError, DismissOutcome};
use super::presenter::AlertPresenter;
use crate::core::config::AlertSettings;

lazy_static! {
    static ref SHARED_MANAGER: Mutex<AlertManager> = Mutex::new(AlertManager::headless());
}

fn manager() -> MutexGuard<'static, AlertManager> {
    SHARED_MANAGER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Attach the presentation backend.
/// Until this is called requests are logged and dropped, holding no identifier.
pub fn install_presenter(presenter: impl AlertPresenter + 'static) {
    manager().set_presenter(presenter);
}

pub fn configure(settings: AlertSettings) {
    manager().update_settings(settings);
}

pub fn show(request: AlertRequest) {
    manager().show(request);
}

pub fn show_information_alert(
    title: &str,
    message: &str,
    always_display: bool,
    cancel_label: &str,
) {
    manager().show_information_alert(title, message, always_display, cancel_label);
}

pub fn show_action_alert(
    title: &str,
    message: &str,
    completion: Option<Completion>,
    always_display: bool,
    cancel_label: &str,
    other_labels: Vec<String>,
) {
    manager().show_action_alert(
        title,
        message,
        completion,
        always_display,
        cancel_label,
        other_labels,
    );
}

/// Route a dismissal to the shared manager.
/// The completion runs after the lock is released, so it may raise another alert.
pub fn dismiss(handle: AlertHandle, index: usize) -> Result<DismissOutcome, DismissError> {
    let resolved = manager().resolve(handle, index)?;
    Ok(resolved.run())
}

pub fn is_displaying(title: Option<&str>, message: Option<&str>) -> bool {
    manager().is_displaying(title, message)
}

pub fn active_count() -> usize {
    manager().active_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alerts::presenter::Presentation;
    use std::sync::Arc;

    // Single test so nothing else races on the process-wide instance
    #[test]
    fn test_shared_manager_lifecycle() {
        // Raised before any UI is attached: dropped, not left occupying the identifier
        show_information_alert("Shared", "msg", false, "OK");
        assert!(!is_displaying(Some("Shared"), None));
        assert_eq!(active_count(), 0);

        let shown: Arc<Mutex<Vec<Presentation>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = shown.clone();
        install_presenter(move |p: Presentation| sink.lock().unwrap().push(p));

        show_information_alert("Shared", "msg", false, "OK");
        show_information_alert("Shared", "msg", false, "OK");
        assert!(is_displaying(Some("Shared"), None));
        assert_eq!(shown.lock().unwrap().len(), 1);

        let handle = shown.lock().unwrap()[0].handle;
        assert_eq!(dismiss(handle, 0), Ok(DismissOutcome::Acknowledged));
        assert!(!is_displaying(Some("Shared"), None));

        // A completion may raise a follow-up alert without deadlocking
        let completion: Completion = Box::new(|label: &str| {
            show_information_alert("Follow-up", label, false, "OK");
        });
        let other = vec!["Next".to_string()];
        show_action_alert("Shared", "msg", Some(completion), false, "Cancel", other);
        let handle = shown.lock().unwrap().last().unwrap().handle;
        let selected = DismissOutcome::Selected("Next".into());
        assert_eq!(dismiss(handle, 1), Ok(selected));

        let last = shown.lock().unwrap().last().unwrap().clone();
        assert_eq!(last.title.as_deref(), Some("Follow-up"));
        assert_eq!(last.message.as_deref(), Some("Next"));
        assert_eq!(active_count(), 1);
        assert_eq!(dismiss(last.handle, 0), Ok(DismissOutcome::Acknowledged));

        configure(AlertSettings {
            default_cancel_label: "Close".into(),
            ..AlertSettings::default()
        });
        show(AlertRequest::information("Configured", "", ""));
        let last = shown.lock().unwrap().last().unwrap().clone();
        assert_eq!(last.buttons, vec!["Close".to_string()]);
        assert_eq!(dismiss(last.handle, 0), Ok(DismissOutcome::Acknowledged));
        assert_eq!(active_count(), 0);
    }
}
