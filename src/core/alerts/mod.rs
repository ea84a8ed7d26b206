// Alert dialog coordination.
//
// Architecture:
// - model.rs: Requests, identifiers, handles and dismissal outcomes
// - tracker.rs: Counted set of identifiers currently on screen
// - presenter.rs: Presentation toolkit seam and built-in backends
// - manager.rs: Admits requests and routes dismissals to completions
// - shared.rs: Lazily created process-wide manager

pub mod manager;
pub mod model;
pub mod presenter;
pub mod shared;
pub mod tracker;
