//! End-to-end webhook delivery tests
//!
//! Each test spins up an in-process receiver on an ephemeral port and drives
//! the notifier against it over real HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, routing::post, Form, Router};
use beacon::prelude::*;
use tokio::sync::Mutex;

type Received = Arc<Mutex<Vec<String>>>;

async fn receive(
    State(received): State<Received>,
    Form(form): Form<HashMap<String, String>>,
) -> &'static str {
    if let Some(payload) = form.get("payload") {
        received.lock().await.push(payload.clone());
    }
    "ok"
}

async fn spawn_receiver() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/hook", post(receive))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind receiver");
    let addr = listener.local_addr().expect("receiver address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve receiver");
    });

    (format!("http://{}/hook", addr), received)
}

fn event(kind: BuildKind, personal: bool) -> BuildEvent {
    BuildEvent::new(
        kind,
        BuildInfo {
            full_name: "Acme :: Backend".to_string(),
            number: "42".to_string(),
            project_id: "acme_backend".to_string(),
            duration_secs: 90,
            personal,
        },
    )
}

#[tokio::test]
async fn test_delivers_form_encoded_payload() {
    let (url, received) = spawn_receiver().await;

    let store = Arc::new(InMemorySettingsStore::new(GlobalConfig {
        default_channel: "#builds".to_string(),
        post_url: url,
        logo_url: "https://example.com/logo.png".to_string(),
        ..GlobalConfig::default()
    }));

    let notifier = SlackNotifier::new(store, SlackConfig::default()).expect("notifier");

    let event = event(BuildKind::Succeeded, false).with_vcs(VcsInfo {
        repository_url: Some("https://git.example.com/acme".to_string()),
        commit_hash: Some("abc123".to_string()),
        author: Some("Alice".to_string()),
        author_email: Some("alice@example.com".to_string()),
        subject: Some("Fix the build".to_string()),
        timestamp: Some("1406000000".to_string()),
    });

    notifier.on_build_event(&event).await;

    let received = received.lock().await;
    assert_eq!(received.len(), 1);

    let payload: serde_json::Value = serde_json::from_str(&received[0]).expect("payload JSON");
    assert_eq!(payload["channel"], "#builds");
    assert_eq!(payload["username"], "Beacon");
    assert_eq!(payload["icon_url"], "https://example.com/logo.png");
    assert_eq!(payload["mrkdwn"], true);
    assert_eq!(
        payload["text"],
        "Project *Acme :: Backend* successfully built in _1 minute and 30 seconds_"
    );

    let attachments = payload["attachments"].as_array().expect("attachments");
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0]["color"], "good");
    assert_eq!(attachments[0]["author_link"], "mailto:alice@example.com");
    assert_eq!(
        attachments[0]["title_link"],
        "https://git.example.com/acme/commit/abc123"
    );
    assert_eq!(attachments[0]["ts"], 1406000000);
}

#[tokio::test]
async fn test_personal_build_makes_no_http_call() {
    let (url, received) = spawn_receiver().await;

    let store = Arc::new(InMemorySettingsStore::new(GlobalConfig {
        default_channel: "#builds".to_string(),
        post_url: url,
        ..GlobalConfig::default()
    }));

    let notifier = SlackNotifier::new(store, SlackConfig::default()).expect("notifier");

    for kind in [BuildKind::Started, BuildKind::Succeeded, BuildKind::Failed] {
        notifier.on_build_event(&event(kind, true)).await;
    }

    assert!(received.lock().await.is_empty());
}

#[tokio::test]
async fn test_disabled_project_makes_no_http_call() {
    let (url, received) = spawn_receiver().await;

    let store = Arc::new(InMemorySettingsStore::new(GlobalConfig {
        default_channel: "#builds".to_string(),
        post_url: url,
        ..GlobalConfig::default()
    }));
    store
        .set_project(
            "acme_backend",
            ProjectConfig {
                enabled: false,
                ..ProjectConfig::default()
            },
        )
        .await;

    let notifier = SlackNotifier::new(store, SlackConfig::default()).expect("notifier");

    for kind in [BuildKind::Started, BuildKind::Succeeded, BuildKind::Failed] {
        notifier.on_build_event(&event(kind, false)).await;
    }

    assert!(received.lock().await.is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_swallowed() {
    let store = Arc::new(InMemorySettingsStore::new(GlobalConfig {
        default_channel: "#builds".to_string(),
        // Nothing listens here; connection is refused.
        post_url: "http://127.0.0.1:1/hook".to_string(),
        ..GlobalConfig::default()
    }));

    let notifier = SlackNotifier::new(
        store,
        SlackConfig {
            timeout_seconds: 2,
            ..SlackConfig::default()
        },
    )
    .expect("notifier");

    // Must return normally: a notification failure never fails the build.
    notifier.on_build_event(&event(BuildKind::Failed, false)).await;
}

#[tokio::test]
async fn test_malformed_webhook_url_is_swallowed() {
    let store = Arc::new(InMemorySettingsStore::new(GlobalConfig {
        default_channel: "#builds".to_string(),
        post_url: "not a url".to_string(),
        ..GlobalConfig::default()
    }));

    let notifier = SlackNotifier::new(store, SlackConfig::default()).expect("notifier");

    notifier.on_build_event(&event(BuildKind::Succeeded, false)).await;
}

#[tokio::test]
async fn test_bus_to_webhook_round_trip() {
    let (url, received) = spawn_receiver().await;

    let store = Arc::new(InMemorySettingsStore::new(GlobalConfig {
        default_channel: "#builds".to_string(),
        post_url: url,
        ..GlobalConfig::default()
    }));
    store
        .set_project(
            "acme_backend",
            ProjectConfig {
                channel: Some("#acme".to_string()),
                ..ProjectConfig::default()
            },
        )
        .await;

    let notifier =
        Arc::new(SlackNotifier::new(store, SlackConfig::default()).expect("notifier"));

    let bus = EventBus::new();
    notifier.attach(&bus).await.expect("attach");

    bus.emit(event(BuildKind::Started, false)).await;

    let received = received.lock().await;
    assert_eq!(received.len(), 1);

    let payload: serde_json::Value = serde_json::from_str(&received[0]).expect("payload JSON");
    assert_eq!(payload["channel"], "#acme");
    assert_eq!(payload["text"], "Project *Acme :: Backend* build started.");
}
