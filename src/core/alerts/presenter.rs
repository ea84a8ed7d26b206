// Presentation backends.
//
// The manager only tells a presenter what to show. Whatever draws the dialog
// reports the tapped button back through `AlertManager::dismiss` (or
// `shared::dismiss`) using the handle it was given.

use log::warn;
use tokio::sync::mpsc;

use super::model::AlertHandle;

/// A dialog to put on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub handle: AlertHandle,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Button labels in display order; index 0 is always the cancel button
    pub buttons: Vec<String>,
}

impl Presentation {
    pub const CANCEL_INDEX: usize = 0;

    pub fn cancel_label(&self) -> Option<&str> {
        self.buttons.get(Self::CANCEL_INDEX).map(String::as_str)
    }
}

/// Why a dialog never reached the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PresentError {
    #[error("no presenter attached, {0} was not shown")]
    Unattached(AlertHandle),

    #[error("alert UI loop is gone, {0} was not shown")]
    Disconnected(AlertHandle),
}

/// Presentation toolkit seam.
///
/// Each successful presentation must eventually produce exactly one
/// dismissal. An `Err` means the dialog is not on screen and will never be
/// dismissed. Implementations must not dismiss synchronously from `present`
/// when used with the shared manager.
pub trait AlertPresenter: Send {
    fn present(&mut self, presentation: Presentation) -> Result<(), PresentError>;
}

/// Headless fallback used until a real presenter is attached.
/// Logs the dialog and reports it as not shown.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl AlertPresenter for LogPresenter {
    fn present(&mut self, presentation: Presentation) -> Result<(), PresentError> {
        warn!(
            "No presenter attached, dropping [{}] {} - {} {:?}",
            presentation.handle,
            presentation.title.as_deref().unwrap_or_default(),
            presentation.message.as_deref().unwrap_or_default(),
            presentation.buttons
        );
        Err(PresentError::Unattached(presentation.handle))
    }
}

/// Forwards presentations to a UI loop over a channel
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    tx: mpsc::UnboundedSender<Presentation>,
}

impl ChannelPresenter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Presentation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AlertPresenter for ChannelPresenter {
    fn present(&mut self, presentation: Presentation) -> Result<(), PresentError> {
        let handle = presentation.handle;
        self.tx
            .send(presentation)
            .map_err(|_| PresentError::Disconnected(handle))
    }
}

/// Closures are presenters that always succeed
impl<F> AlertPresenter for F
where
    F: FnMut(Presentation) + Send,
{
    fn present(&mut self, presentation: Presentation) -> Result<(), PresentError> {
        self(presentation);
        Ok(())
    }
}
