//! # Clipper Config
//!
//! Configuration management for Clipper: Notion credentials, capture
//! options, the local history log and the companion server.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
