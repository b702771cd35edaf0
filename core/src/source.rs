//! Event source trait and callback registration

use crate::errors::BeaconError;
use crate::event::BuildEvent;
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;
use uuid::Uuid;

/// Callback type for build event handling
pub type EventCallback = Arc<
    dyn Fn(BuildEvent) -> Pin<Box<dyn Future<Output = Result<(), BeaconError>> + Send>>
        + Send
        + Sync,
>;

/// Handle for managing a registered callback
#[derive(Debug, Clone)]
pub struct SubscriptionHandle {
    pub id: Uuid,
}

impl SubscriptionHandle {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Trait for registering build event callbacks
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Register a callback for build lifecycle events
    async fn subscribe(&self, callback: EventCallback) -> Result<SubscriptionHandle, BeaconError>;

    /// Remove a previously registered callback
    async fn unsubscribe(&self, handle: &SubscriptionHandle) -> Result<(), BeaconError>;
}

/// In-process event bus the host pushes build events into
#[derive(Default)]
pub struct EventBus {
    callbacks: RwLock<HashMap<Uuid, EventCallback>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one event to every registered callback, serially.
    ///
    /// Callback failures are logged and never propagated: a notification
    /// failure must not fail the build.
    pub async fn emit(&self, event: BuildEvent) {
        let callbacks = self.callbacks.read().await;
        for (id, callback) in callbacks.iter() {
            if let Err(e) = callback(event.clone()).await {
                error!(
                    subscription = %id,
                    event_id = %event.id(),
                    error = %e,
                    "Build event callback failed"
                );
            }
        }
    }
}

#[async_trait]
impl EventSource for EventBus {
    async fn subscribe(&self, callback: EventCallback) -> Result<SubscriptionHandle, BeaconError> {
        let handle = SubscriptionHandle::new(Uuid::new_v4());
        self.callbacks.write().await.insert(handle.id, callback);
        Ok(handle)
    }

    async fn unsubscribe(&self, handle: &SubscriptionHandle) -> Result<(), BeaconError> {
        self.callbacks.write().await.remove(&handle.id);
        Ok(())
    }
}
