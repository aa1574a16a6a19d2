//! Application layer: startup configuration and the main menu loop.
//!
//! This module sits between the command line and the presentation layer,
//! deciding how a session is set up and dispatching menu choices.

pub mod config;
pub mod runner;

pub use config::*;
pub use runner::*;
