//! Build event gating and notification dispatch

use std::sync::Arc;

use beacon_core::{
    BeaconError, BuildEvent, BuildKind, EffectiveConfig, EventCallback, EventSource, GlobalConfig,
    SettingsStore, SubscriptionHandle,
};
use tracing::{debug, info, warn};

use crate::client::{SlackClient, SlackTransport};
use crate::config::SlackConfig;
use crate::message::compose;

/// Posts build lifecycle notifications to a Slack incoming webhook.
///
/// One instance serves every project; settings are resolved fresh for each
/// event. Delivery failures are logged and swallowed, never surfaced to the
/// host.
pub struct SlackNotifier<T: SlackTransport = SlackClient> {
    store: Arc<dyn SettingsStore>,
    transport: T,
    config: SlackConfig,
}

impl SlackNotifier<SlackClient> {
    pub fn new(store: Arc<dyn SettingsStore>, config: SlackConfig) -> Result<Self, BeaconError> {
        let transport = SlackClient::new(&config)?;
        Ok(Self {
            store,
            transport,
            config,
        })
    }
}

impl<T: SlackTransport> SlackNotifier<T> {
    /// Create a notifier over a custom transport
    pub fn with_transport(store: Arc<dyn SettingsStore>, config: SlackConfig, transport: T) -> Self {
        Self {
            store,
            transport,
            config,
        }
    }

    /// Handle one build lifecycle event, posting at most one message.
    pub async fn on_build_event(&self, event: &BuildEvent) {
        // Personal builds never produce a notification.
        if event.build.personal {
            return;
        }

        let global = self.store.global().await;
        let project = self.store.project(&event.build.project_id).await;
        let effective = EffectiveConfig::resolve(project.as_ref(), &global);

        if !effective.enabled {
            debug!(
                project_id = %event.build.project_id,
                "Notifications disabled for project"
            );
            return;
        }

        // Kind-level posting policy is global-only; projects override just
        // the overall enabled flag.
        if !kind_enabled(event.kind, &global) {
            return;
        }

        if effective.post_url.is_empty() {
            debug!(
                project_id = %event.build.project_id,
                "No webhook URL configured"
            );
            return;
        }

        let payload = compose(event, &effective, &self.config.username);

        match self.transport.post(&effective.post_url, &payload).await {
            Ok(status) => info!(
                event_id = %event.id(),
                kind = event.kind.as_str(),
                channel = %payload.channel,
                status = status,
                "Posted build notification"
            ),
            Err(e) => warn!(
                event_id = %event.id(),
                kind = event.kind.as_str(),
                error = %e,
                "Failed to post build notification"
            ),
        }
    }
}

impl<T: SlackTransport + 'static> SlackNotifier<T> {
    /// Register this notifier's callback with an event source.
    pub async fn attach(
        self: &Arc<Self>,
        source: &dyn EventSource,
    ) -> Result<SubscriptionHandle, BeaconError> {
        let notifier = Arc::clone(self);
        let callback: EventCallback = Arc::new(move |event: BuildEvent| {
            let notifier = Arc::clone(&notifier);
            Box::pin(async move {
                notifier.on_build_event(&event).await;
                Ok(())
            })
        });

        source.subscribe(callback).await
    }
}

fn kind_enabled(kind: BuildKind, global: &GlobalConfig) -> bool {
    match kind {
        BuildKind::Started => global.post_on_start,
        BuildKind::Succeeded => global.post_on_success,
        BuildKind::Failed => global.post_on_failure,
    }
}
