//! Slack notification example
//!
//! This example demonstrates Beacon end to end:
//! - Global defaults with a per-project channel override
//! - Registering the notifier on an event bus
//! - Emitting started/succeeded/failed build events
//!
//! Point it at a real webhook with SLACK_WEBHOOK_URL, or run any HTTP
//! receiver on localhost:3000 to inspect the payloads.

use std::sync::Arc;

use beacon::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("slack_notify=info,beacon=info,beacon_slack=info")
        .init();

    let webhook_url = std::env::var("SLACK_WEBHOOK_URL")
        .unwrap_or_else(|_| "http://localhost:3000/hook".to_string());

    println!("=== Beacon Slack Notifier Example ===\n");

    println!("⚙️  Configuring settings store");
    let store = Arc::new(InMemorySettingsStore::new(GlobalConfig {
        default_channel: "#builds".to_string(),
        post_url: webhook_url.clone(),
        logo_url: "https://example.com/beacon.png".to_string(),
        ..GlobalConfig::default()
    }));

    // The frontend team posts to its own channel; everything else falls
    // back to the global defaults.
    store
        .set_project(
            "acme_frontend",
            ProjectConfig {
                channel: Some("#frontend".to_string()),
                ..ProjectConfig::default()
            },
        )
        .await;
    println!("   Global channel: #builds");
    println!("   Project override: acme_frontend -> #frontend");
    println!("   Webhook URL: {}\n", webhook_url);

    let notifier = Arc::new(SlackNotifier::new(store, SlackConfig::default())?);

    let bus = EventBus::new();
    let handle = notifier.attach(&bus).await?;
    println!("📡 Notifier registered (subscription {})\n", handle.id);

    let build = BuildInfo {
        full_name: "Acme :: Frontend".to_string(),
        number: "128".to_string(),
        project_id: "acme_frontend".to_string(),
        duration_secs: 0,
        personal: false,
    };

    println!("🚀 Emitting build started event...");
    bus.emit(BuildEvent::new(BuildKind::Started, build.clone()))
        .await;

    println!("✅ Emitting build succeeded event...");
    let succeeded = BuildEvent::new(
        BuildKind::Succeeded,
        BuildInfo {
            duration_secs: 3661,
            ..build.clone()
        },
    )
    .with_vcs(VcsInfo {
        repository_url: Some("https://git.example.com/acme/frontend".to_string()),
        commit_hash: Some("4f2d81c".to_string()),
        author: Some("Alice".to_string()),
        author_email: Some("alice@example.com".to_string()),
        subject: Some("Speed up asset pipeline".to_string()),
        timestamp: Some("1406000000".to_string()),
    })
    .with_committers(vec![
        Committer {
            name: Some("Alice".to_string()),
            username: Some("alice.w".to_string()),
        },
        Committer {
            name: None,
            username: Some("bob".to_string()),
        },
    ])
    .with_issues(vec![IssueRef {
        id: "ACME-311".to_string(),
        url: "https://tracker.example.com/ACME-311".to_string(),
    }]);
    bus.emit(succeeded).await;

    println!("❌ Emitting build failed event...");
    bus.emit(BuildEvent::new(BuildKind::Failed, build)).await;

    println!("\nDone. Delivery results are in the logs above.");

    Ok(())
}
