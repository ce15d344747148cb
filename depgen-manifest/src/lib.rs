//! Parsing and validation of dependencies.yaml.
//!
//! The manifest is validated once at load time: output values, include
//! references and grouped package entries are checked here, with errors
//! pointing back into the source through `miette`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod serde_helpers;

pub use error::{Error, Result, SourceContext};
pub use manifest::*;
