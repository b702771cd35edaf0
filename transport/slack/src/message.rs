//! Slack message payload model and composition

use beacon_core::{format_duration, BuildEvent, BuildKind, EffectiveConfig};
use serde::Serialize;
use tracing::warn;

/// A key/value block inside an attachment
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// Structured, colored sub-block of a chat message
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    /// "good" or "danger"
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    /// Commit time as epoch seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    pub fields: Vec<Field>,
}

/// Wire-ready message for a Slack incoming webhook
#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    pub channel: String,
    pub username: String,
    pub text: String,
    pub icon_url: String,
    pub mrkdwn: bool,
    pub attachments: Vec<Attachment>,
}

fn color_for(kind: BuildKind) -> &'static str {
    match kind {
        BuildKind::Started | BuildKind::Succeeded => "good",
        BuildKind::Failed => "danger",
    }
}

fn text_for(event: &BuildEvent) -> String {
    match event.kind {
        BuildKind::Started => format!("Project *{}* build started.", event.build.full_name),
        BuildKind::Failed => format!("Project *{}* build failed!", event.build.full_name),
        BuildKind::Succeeded => format!(
            "Project *{}* successfully built in _{}_",
            event.build.full_name,
            format_duration(event.build.duration_secs)
        ),
    }
}

/// Assemble the wire payload for one build event under an effective config.
///
/// The payload always carries exactly one attachment; its optional commit
/// metadata and fields depend on what the event and the config provide.
pub fn compose(event: &BuildEvent, config: &EffectiveConfig, username: &str) -> Payload {
    let mut attachment = Attachment {
        color: color_for(event.kind).to_string(),
        author_name: None,
        author_link: None,
        title: None,
        title_link: None,
        ts: None,
        fields: Vec::new(),
    };

    let vcs = &event.vcs;

    if let (Some(author), Some(email)) = (&vcs.author, &vcs.author_email) {
        attachment.author_name = Some(author.clone());
        attachment.author_link = Some(format!("mailto:{}", email));
    }

    if let (Some(repo), Some(hash), Some(subject), Some(timestamp)) = (
        &vcs.repository_url,
        &vcs.commit_hash,
        &vcs.subject,
        &vcs.timestamp,
    ) {
        // A timestamp the VCS reported in a non-numeric form drops the
        // commit metadata block, not the whole notification.
        match timestamp.parse::<i64>() {
            Ok(ts) => {
                attachment.title = Some(subject.clone());
                attachment.title_link = Some(format!("{}/commit/{}", repo, hash));
                attachment.ts = Some(ts);
            }
            Err(_) => warn!(
                event_id = %event.id(),
                timestamp = %timestamp,
                "Skipping commit metadata: unparseable timestamp"
            ),
        }
    }

    if config.include_build_number {
        attachment.fields.push(Field {
            title: "Build".to_string(),
            value: event.build.number.clone(),
            short: true,
        });
    }

    if config.include_committers {
        let committers: Vec<&str> = event
            .committers
            .iter()
            .filter_map(|c| c.display_name())
            .collect();
        if !committers.is_empty() {
            attachment.fields.push(Field {
                title: "Changes By".to_string(),
                value: committers.join(","),
                short: true,
            });
        }
    }

    if config.include_issues && !event.issues.is_empty() {
        let issues: Vec<String> = event
            .issues
            .iter()
            .map(|issue| format!("<{}|{}>", issue.url, issue.id))
            .collect();
        attachment.fields.push(Field {
            title: "Related Issues".to_string(),
            value: issues.join(","),
            short: true,
        });
    }

    Payload {
        channel: config.channel.clone(),
        username: username.to_string(),
        text: text_for(event),
        icon_url: config.logo_url.clone(),
        mrkdwn: true,
        attachments: vec![attachment],
    }
}
