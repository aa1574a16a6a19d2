//! bookshelf - Personal Library Catalog
//!
//! A terminal catalog of books kept in a JSON file, usable both as a
//! full-screen application and as a plain line-oriented one.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
