//! Build lifecycle event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event metadata containing common information about the event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier
    pub id: Uuid,
    /// Timestamp when the event was received from the build server
    pub timestamp: DateTime<Utc>,
    /// Optional source identifier (e.g., build agent name)
    pub source: Option<String>,
}

impl EventMetadata {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Build lifecycle outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildKind {
    Started,
    Succeeded,
    Failed,
}

impl BuildKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildKind::Started => "started",
            BuildKind::Succeeded => "succeeded",
            BuildKind::Failed => "failed",
        }
    }
}

/// Identity of the build an event refers to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Full display name of the project (e.g., "Acme :: Backend")
    pub full_name: String,
    /// Build number as the server reports it
    pub number: String,
    /// Project identifier used for settings lookup
    pub project_id: String,
    /// Wall-clock build duration in seconds
    pub duration_secs: u64,
    /// Personal builds are excluded from team notifications
    pub personal: bool,
}

/// VCS metadata attached to a build, where the server could resolve it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VcsInfo {
    pub repository_url: Option<String>,
    pub commit_hash: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub subject: Option<String>,
    /// Commit time as epoch seconds, in whatever form the VCS reported it
    pub timestamp: Option<String>,
}

/// A user with changes in the build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committer {
    pub name: Option<String>,
    pub username: Option<String>,
}

impl Committer {
    /// Display name, falling back to the username when the name is blank
    pub fn display_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Some(name),
            _ => self.username.as_deref().filter(|u| !u.is_empty()),
        }
    }
}

/// An issue-tracker ticket related to a build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRef {
    pub id: String,
    pub url: String,
}

/// A build lifecycle event as delivered by the host build server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildEvent {
    /// Event metadata
    pub metadata: EventMetadata,
    /// Lifecycle outcome this event reports
    pub kind: BuildKind,
    /// Identity of the build
    pub build: BuildInfo,
    /// Commit metadata, all optional
    pub vcs: VcsInfo,
    /// Users with changes since the previous build
    pub committers: Vec<Committer>,
    /// Issues related to the build
    pub issues: Vec<IssueRef>,
}

impl BuildEvent {
    pub fn new(kind: BuildKind, build: BuildInfo) -> Self {
        Self {
            metadata: EventMetadata::new(),
            kind,
            build,
            vcs: VcsInfo::default(),
            committers: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn with_vcs(mut self, vcs: VcsInfo) -> Self {
        self.vcs = vcs;
        self
    }

    pub fn with_committers(mut self, committers: Vec<Committer>) -> Self {
        self.committers = committers;
        self
    }

    pub fn with_issues(mut self, issues: Vec<IssueRef>) -> Self {
        self.issues = issues;
        self
    }

    /// Get event ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Get event timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.metadata.timestamp
    }
}
