//! Notification configuration model and effective-config resolution
//!
//! A project may override the channel, webhook URL and icon; empty or
//! missing overrides fall back to the global defaults. The per-project
//! record is the persisted schema, which evolved over time, so readers must
//! tolerate missing keys and default them permissively.

use serde::{Deserialize, Serialize};

/// Process-wide notification defaults, shared read-only by all projects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Channel used when a project does not set its own
    pub default_channel: String,
    /// Incoming-webhook URL used when a project does not set its own
    pub post_url: String,
    /// Icon shown next to posted messages
    pub logo_url: String,
    /// Post a message when a build starts
    pub post_on_start: bool,
    /// Post a message when a build succeeds
    pub post_on_success: bool,
    /// Post a message when a build fails
    pub post_on_failure: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_channel: String::new(),
            post_url: String::new(),
            logo_url: String::new(),
            post_on_start: true,
            post_on_success: true,
            post_on_failure: true,
        }
    }
}

/// Per-project override record, as persisted by the settings store.
///
/// An earlier schema version carried only `channel`, `logo` and the
/// `enabled` attribute; `logo` is still accepted as an alias for `logoUrl`,
/// and any missing key deserializes to its permissive default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(rename = "postUrl", skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    #[serde(rename = "logoUrl", alias = "logo", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Master switch: disabled suppresses every notification for the project
    pub enabled: bool,
    /// Include the "Build" field in attachments
    #[serde(rename = "build")]
    pub include_build_number: bool,
    /// Include the "Related Issues" field in attachments
    #[serde(rename = "issues")]
    pub include_issues: bool,
    /// Include the "Changes By" field in attachments
    #[serde(rename = "committers")]
    pub include_committers: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            channel: None,
            post_url: None,
            logo_url: None,
            enabled: true,
            include_build_number: true,
            include_issues: true,
            include_committers: true,
        }
    }
}

/// Merged result of a project override and the global defaults for one
/// notification. Computed fresh per event, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub channel: String,
    pub post_url: String,
    pub logo_url: String,
    pub enabled: bool,
    pub include_build_number: bool,
    pub include_issues: bool,
    pub include_committers: bool,
}

impl EffectiveConfig {
    /// Resolve the effective configuration for one project.
    ///
    /// A project value wins only when present and non-empty; everything else
    /// falls back to the global value. With no project record at all, the
    /// result is the global defaults with every flag permissive.
    pub fn resolve(project: Option<&ProjectConfig>, global: &GlobalConfig) -> Self {
        match project {
            Some(project) => Self {
                channel: pick(project.channel.as_deref(), &global.default_channel),
                post_url: pick(project.post_url.as_deref(), &global.post_url),
                logo_url: pick(project.logo_url.as_deref(), &global.logo_url),
                enabled: project.enabled,
                include_build_number: project.include_build_number,
                include_issues: project.include_issues,
                include_committers: project.include_committers,
            },
            None => Self {
                channel: global.default_channel.clone(),
                post_url: global.post_url.clone(),
                logo_url: global.logo_url.clone(),
                enabled: true,
                include_build_number: true,
                include_issues: true,
                include_committers: true,
            },
        }
    }
}

fn pick(project: Option<&str>, global: &str) -> String {
    match project {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => global.to_string(),
    }
}
