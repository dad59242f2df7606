use std::fmt;
use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::allowlist::is_allowed;
use crate::error::AuditError;
use crate::github::list_public_repos;
use crate::report::AuditReport;
use crate::slack::{build_alarm_payload, send_to_slack};
use crate::types::{AlarmEvent, Config, ErrorPolicy, RepositoryDescriptor, Verdict};

/// Runs one audit of an organization's public repositories
pub struct Auditor<'a> {
    client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> Auditor<'a> {
    pub fn new(client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self { client, config }
    }

    /// List, classify and alarm, writing one status block per repository to `out`.
    ///
    /// Under [`ErrorPolicy::Lenient`] nothing is returned as an error. Under
    /// [`ErrorPolicy::Strict`] a listing failure is returned immediately, while
    /// a failed status write or an undelivered alarm fails the run only once
    /// every repository is checked. A failed write never skips an alarm.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<AuditReport, AuditError> {
        let mut report = AuditReport::new(&self.config.github_org_name);

        let repos = match self.list_repos().await {
            Ok(repos) => repos,
            Err(e) if self.config.error_policy == ErrorPolicy::Lenient => {
                warn!("continuing with no repositories: {}", e);
                report.listing_failed = true;
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        info!("{} public repositories listed for {}", repos.len(), self.config.github_org_name);

        let mut status = StatusWriter::new(out);
        for repo in repos {
            let verdict = self.check_repo(&repo, &mut report, &mut status).await;
            report.record(repo, verdict);
        }

        report.output_failures = status.failures;
        report.finish();

        if self.config.error_policy == ErrorPolicy::Strict {
            if let Some(e) = status.first_error {
                return Err(AuditError::Output(e));
            }
        }
        let failed = report.notification_failures.len();
        if failed > 0 && self.config.error_policy == ErrorPolicy::Strict {
            return Err(AuditError::NotificationsFailed { failed });
        }
        Ok(report)
    }

    async fn list_repos(&self) -> Result<Vec<RepositoryDescriptor>, AuditError> {
        list_public_repos(self.client, &self.config.github_api_url, &self.config.github_org_name).await
    }

    async fn check_repo<W: Write>(
        &self,
        repo: &RepositoryDescriptor,
        report: &mut AuditReport,
        status: &mut StatusWriter<'_, W>,
    ) -> Verdict {
        status.line(format_args!(""));
        status.line(format_args!("Checking {}", repo.name));

        if is_allowed(&repo.name, &self.config.allowed_repos) {
            status.line(format_args!("OK: repo {} found in Allowed", repo.name));
            return Verdict::Ok;
        }

        status.line(format_args!("ALARM: repo {} was NOT found in Allowed!", repo.name));
        if let Err(e) = self.alarm(&AlarmEvent::from(repo)).await {
            status.line(format_args!("error: {}", e));
            report.record_notification_failure(&repo.name, &e);
        }
        Verdict::Alarm
    }

    /// Send one Slack alarm for `event`.
    pub async fn alarm(&self, event: &AlarmEvent) -> Result<(), AuditError> {
        debug!("sending alarm for {}", event.repo_name);
        let payload = build_alarm_payload(self.config, event);
        send_to_slack(self.client, &self.config.slack_url, &payload).await
    }
}

/// Status-line sink that keeps going after a write fails.
struct StatusWriter<'w, W> {
    out: &'w mut W,
    failures: usize,
    first_error: Option<io::Error>,
}

impl<'w, W: Write> StatusWriter<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, failures: 0, first_error: None }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            warn!("failed to write status line: {}", e);
            self.failures += 1;
            self.first_error.get_or_insert(e);
        }
    }
}
