//! Core types and traits for the Beacon build notification system

pub mod config;
pub mod duration;
pub mod errors;
pub mod event;
pub mod prelude;
pub mod source;
pub mod store;

pub use config::{EffectiveConfig, GlobalConfig, ProjectConfig};
pub use duration::format_duration;
pub use errors::BeaconError;
pub use event::{BuildEvent, BuildInfo, BuildKind, Committer, EventMetadata, IssueRef, VcsInfo};
pub use source::{EventBus, EventCallback, EventSource, SubscriptionHandle};
pub use store::{InMemorySettingsStore, SettingsStore};
