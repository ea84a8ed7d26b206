#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod core;

pub use crate::core::alerts::manager::AlertManager;
pub use crate::core::alerts::model::{
    AlertHandle, AlertIdentifier, AlertRequest, Completion, DismissError, DismissOutcome,
};
pub use crate::core::alerts::presenter::{
    AlertPresenter, ChannelPresenter, LogPresenter, PresentError, Presentation,
};
pub use crate::core::alerts::shared;
pub use crate::core::config::AlertSettings;
