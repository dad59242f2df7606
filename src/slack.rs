use tracing::error;
use crate::error::AuditError;
use crate::types::{AlarmEvent, Config, SlackAction, SlackAttachment, SlackPayload};

const USERNAME: &str = "Github checker";
const ICON_EMOJI: &str = ":scream:";

pub fn build_alarm_payload(cfg: &Config, event: &AlarmEvent) -> SlackPayload {
    let text = format!(
        "{} *ALARM*: repository `{}` was NOT found in Allowed!",
        ICON_EMOJI, event.repo_name
    );

    let attachment = SlackAttachment {
        actions: vec![SlackAction {
            kind: "button".to_string(),
            text: "RepoURL".to_string(),
            url: event.repo_url.clone(),
            style: "danger".to_string(),
        }],
    };

    SlackPayload {
        username: USERNAME.to_string(),
        icon_emoji: ICON_EMOJI.to_string(),
        channel: cfg.slack_channel.clone(),
        text,
        attachments: vec![attachment],
    }
}

pub async fn send_to_slack(
    client: &reqwest::Client,
    webhook_url: &str,
    payload: &SlackPayload,
) -> Result<(), AuditError> {
    let res = client
        .post(webhook_url)
        .json(payload)
        .send()
        .await
        .map_err(AuditError::Notify)?;
    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        error!("Slack webhook failed: {} - {}", status, body);
        return Err(AuditError::NotifyStatus { status, body });
    }
    Ok(())
}
