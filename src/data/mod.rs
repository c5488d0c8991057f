//! Input collection module.

pub mod tokens;

pub use tokens::*;
