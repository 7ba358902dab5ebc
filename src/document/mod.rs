//! Converted flow graph document (target schema).

pub mod types;

pub use types::*;
