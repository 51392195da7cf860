//! CLI command implementations

pub mod apply;
pub mod check;
pub mod order;
