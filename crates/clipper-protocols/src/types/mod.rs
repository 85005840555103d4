//! Core data types.

mod block;
mod capture;
mod document;

pub use block::*;
pub use capture::*;
pub use document::*;
