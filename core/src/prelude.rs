//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the beacon-core
//! crate.

pub use crate::config::{EffectiveConfig, GlobalConfig, ProjectConfig};
pub use crate::duration::format_duration;
pub use crate::errors::BeaconError;
pub use crate::event::{
    BuildEvent, BuildInfo, BuildKind, Committer, EventMetadata, IssueRef, VcsInfo,
};
pub use crate::source::{EventBus, EventCallback, EventSource, SubscriptionHandle};
pub use crate::store::{InMemorySettingsStore, SettingsStore};
