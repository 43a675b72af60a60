//! clipshelf application layer
//!
//! This crate owns the application state container and the use cases that
//! drive it from the outside world (clipboard capture and copy).

pub mod app_paths;
pub mod state;
pub mod usecases;

pub use state::{AppState, StateChange};
pub use usecases::{
    CaptureClipboard, CaptureOutcome, CopyOutcome, CopyTarget, CopyToClipboard,
};
