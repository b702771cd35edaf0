//! # Beacon
//!
//! A build-event notification library: it receives build lifecycle events
//! (started, succeeded, failed) from a CI server, resolves per-project
//! notification settings against global defaults, and posts a formatted
//! message to a Slack-compatible incoming webhook.
//!
//! ## Features
//!
//! - **Per-project configuration**: project overrides fall back to global
//!   defaults, resolved fresh for every event
//! - **Event-driven**: register the notifier on an event source and push
//!   build events through it
//! - **Fire-and-forget delivery**: one POST per event; failures are logged
//!   and never surfaced to the build
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use beacon::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), BeaconError> {
//!     let store = Arc::new(InMemorySettingsStore::new(GlobalConfig {
//!         default_channel: "#builds".to_string(),
//!         post_url: "https://hooks.slack.com/services/T000/B000/XXXX".to_string(),
//!         ..GlobalConfig::default()
//!     }));
//!
//!     let notifier = SlackNotifier::new(store, SlackConfig::default())?;
//!
//!     let event = BuildEvent::new(
//!         BuildKind::Succeeded,
//!         BuildInfo {
//!             full_name: "Acme :: Backend".to_string(),
//!             number: "17".to_string(),
//!             project_id: "acme_backend".to_string(),
//!             duration_secs: 90,
//!             personal: false,
//!         },
//!     );
//!
//!     notifier.on_build_event(&event).await;
//!
//!     Ok(())
//! }
//! ```

pub mod prelude;

// Re-export all public types from member crates
pub use beacon_core::{
    format_duration, BeaconError, BuildEvent, BuildInfo, BuildKind, Committer, EffectiveConfig,
    EventBus, EventCallback, EventMetadata, EventSource, GlobalConfig, InMemorySettingsStore,
    IssueRef, ProjectConfig, SettingsStore, SubscriptionHandle, VcsInfo,
};

pub use beacon_slack::{
    compose, Attachment, Field, Payload, SlackClient, SlackConfig, SlackNotifier, SlackTransport,
};
