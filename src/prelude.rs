//! Prelude module for convenient imports
//!
//! Re-exports the preludes of the member crates.

pub use beacon_core::prelude::*;
pub use beacon_slack::prelude::*;
