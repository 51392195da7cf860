//! Ordinal Order - Constraint-driven item ordering
//!
//! This crate resolves `first`/`last`/`before`/`after` constraints declared by
//! named items into a single deterministic order, and loads item lists from
//! TOML files.

mod deferred;
mod document;
mod item;
mod orderer;
mod registry;
mod weights;

pub use document::ItemDocument;
pub use item::{ItemDef, ItemFile, Positioned, RawItemDef};
pub use orderer::{order, Orderer};
pub use registry::ItemRegistry;
