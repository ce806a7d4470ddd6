//! Shared terminal utilities.
//!
//! Box drawing, full-screen management, and ANSI helpers.

mod output;
mod screen;

pub use output::*;
pub use screen::*;
