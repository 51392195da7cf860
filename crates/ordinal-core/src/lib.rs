//! Ordinal Core - Foundational types for the Ordinal ordering engine
//!
//! This crate provides the types the other Ordinal crates depend on:
//! - `Position` - The positional constraint an item declares
//! - `Side` - Which side of a target a before/after constraint refers to
//! - Error types and Result alias

mod error;
mod position;

pub use error::{OrdinalError, Result};
pub use position::{Position, Side};
