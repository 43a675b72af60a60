//! # cs-platform
//!
//! Platform-specific implementations for clipshelf.
//!
//! This crate contains infrastructure implementations that interact with
//! the operating system: the system clipboard and per-user data directories.

pub mod app_dirs;
pub mod clipboard;
