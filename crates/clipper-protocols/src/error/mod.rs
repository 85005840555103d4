//! Error types for the Clipper protocol layer.

mod capture;
mod history;
mod submit;

pub use capture::*;
pub use history::*;
pub use submit::*;
