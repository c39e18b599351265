//! Core abstractions for diagram generation
//!
//! This module defines the declaration model, the error type, and the
//! traits for the collaborators around the generation pipeline.

mod config;
mod error;
pub mod logging;
mod root;
mod source;
mod types;
mod writer;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use root::*;
pub use source::*;
pub use types::*;
pub use writer::*;
