//! Composition root: configuration, logging and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use wiring::{build_state, resolve_data_root, StoreChoice};
