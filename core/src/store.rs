//! Settings store trait and in-memory implementation

use crate::config::{GlobalConfig, ProjectConfig};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Read access to persisted notification settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Per-project override record, if one was persisted
    async fn project(&self, project_id: &str) -> Option<ProjectConfig>;

    /// Process-wide defaults
    async fn global(&self) -> GlobalConfig;
}

/// In-memory settings store.
///
/// Reads are shared; writes (administrative updates, config hot-reload) go
/// through the single-writer lock.
#[derive(Default)]
pub struct InMemorySettingsStore {
    global: RwLock<GlobalConfig>,
    projects: RwLock<HashMap<String, ProjectConfig>>,
}

impl InMemorySettingsStore {
    pub fn new(global: GlobalConfig) -> Self {
        Self {
            global: RwLock::new(global),
            projects: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the global defaults (config hot-reload)
    pub async fn set_global(&self, global: GlobalConfig) {
        *self.global.write().await = global;
    }

    /// Create or replace a project's override record
    pub async fn set_project(&self, project_id: impl Into<String>, config: ProjectConfig) {
        self.projects.write().await.insert(project_id.into(), config);
    }

    /// Drop a project's override record (project deleted)
    pub async fn remove_project(&self, project_id: &str) {
        self.projects.write().await.remove(project_id);
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn project(&self, project_id: &str) -> Option<ProjectConfig> {
        self.projects.read().await.get(project_id).cloned()
    }

    async fn global(&self) -> GlobalConfig {
        self.global.read().await.clone()
    }
}
