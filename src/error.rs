use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to list repositories for org '{org}': {source}")]
    Listing {
        org: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub API returned {status} listing repositories for org '{org}'")]
    ListingStatus {
        org: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to send Slack request: {0}")]
    Notify(#[source] reqwest::Error),

    #[error("Slack webhook returned {status}: {body}")]
    NotifyStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{failed} Slack alarm(s) could not be delivered")]
    NotificationsFailed { failed: usize },

    #[error("failed to write audit output: {0}")]
    Output(#[from] std::io::Error),
}
