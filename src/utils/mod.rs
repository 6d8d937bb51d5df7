//! Shared utilities.

pub mod process_guard;
