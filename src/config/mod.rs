//! Configuration module for the panel console
//!
//! This module holds the editor preferences and the JSON persistence layer
//! that stores the designated persisted fields of both stores in a
//! platform-specific directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
