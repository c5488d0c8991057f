//! Domain value objects for address literals and their validation.

pub mod types;

pub use types::*;
