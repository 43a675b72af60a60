//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (state container
//! and use cases) and infrastructure implementations, so the core stays
//! independent of storage backends and operating-system clipboards.
//!
//! ## Port Placement Guidelines
//!
//! A trait belongs here when it represents a capability the application
//! needs and it is implemented by the infra or platform layer.

pub mod app_dirs;
pub mod clipboard;
mod clock;
pub mod errors;
pub mod storage;

pub use app_dirs::AppDirsPort;
pub use clipboard::SystemClipboardPort;
pub use clock::*;
pub use errors::AppDirsError;
pub use storage::{KeyValueStorePort, StorageError};
