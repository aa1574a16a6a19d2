//! Infrastructure layer providing external service integrations.
//!
//! This module contains the file-backed catalog store and the
//! log file setup.

pub mod logging;
pub mod persistence;

pub use persistence::*;
