//! Slack incoming-webhook transport for Beacon
//!
//! Composes a formatted message for a build lifecycle event and delivers it
//! with a single `payload=<url-encoded JSON>` form POST, the way Slack
//! incoming webhooks expect it.

pub mod client;
pub mod config;
pub mod message;
pub mod notifier;
pub mod prelude;

pub use client::{SlackClient, SlackTransport};
pub use config::SlackConfig;
pub use message::{compose, Attachment, Field, Payload};
pub use notifier::SlackNotifier;
