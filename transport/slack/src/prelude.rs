//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the beacon-slack crate.

pub use crate::client::{SlackClient, SlackTransport};
pub use crate::config::SlackConfig;
pub use crate::message::{compose, Attachment, Field, Payload};
pub use crate::notifier::SlackNotifier;
