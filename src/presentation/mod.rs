//! Presentation layer handling terminal output and user input.
//!
//! Both front ends implement [`Screen`]; the menu flows and paged listings
//! in [`Interface`] are written once against it.

pub mod screen;
pub mod pagination;
pub mod interface;
pub mod plain;
pub mod input;
pub mod ui;

pub use screen::*;
pub use pagination::*;
pub use interface::*;
pub use plain::*;
pub use input::*;
pub use ui::*;
