use serde::{Deserialize, Serialize};

use crate::allowlist::AllowedSet;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_org_name: String,
    pub allowed_repos: AllowedSet,
    pub slack_url: String,
    pub slack_channel: String,
    pub github_api_url: String,
    pub error_policy: ErrorPolicy,
}

/// How the auditor treats listing and notification failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Failures are reported and the run still completes successfully.
    #[default]
    Lenient,
    /// A listing failure aborts the run; notification failures fail it at the end.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmEvent {
    pub repo_name: String,
    pub repo_url: String,
}

impl From<&RepositoryDescriptor> for AlarmEvent {
    fn from(repo: &RepositoryDescriptor) -> Self {
        Self {
            repo_name: repo.name.clone(),
            repo_url: repo.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Alarm,
}

/// Subset of the GitHub repository object we care about.
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub html_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlackPayload {
    pub username: String,
    pub icon_emoji: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub channel: String,
    pub text: String,
    pub attachments: Vec<SlackAttachment>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SlackAttachment {
    pub actions: Vec<SlackAction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlackAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub url: String,
    pub style: String,
}
