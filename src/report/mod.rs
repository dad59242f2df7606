use chrono::{DateTime, Utc};

use crate::types::{RepositoryDescriptor, Verdict};

/// Outcome of one audit run
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub org: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Set when the repository listing failed and the run continued with nothing to check.
    pub listing_failed: bool,
    pub checked: Vec<CheckedRepo>,
    /// Status lines that could not be written to the output.
    pub output_failures: usize,
    pub notification_failures: Vec<NotificationFailure>,
}

#[derive(Debug, Clone)]
pub struct CheckedRepo {
    pub repo: RepositoryDescriptor,
    pub verdict: Verdict,
}

#[derive(Debug, Clone)]
pub struct NotificationFailure {
    pub repo_name: String,
    pub error: String,
}

impl AuditReport {
    pub fn new(org: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            started_at: Utc::now(),
            finished_at: None,
            listing_failed: false,
            checked: Vec::new(),
            output_failures: 0,
            notification_failures: Vec::new(),
        }
    }

    pub fn record(&mut self, repo: RepositoryDescriptor, verdict: Verdict) {
        self.checked.push(CheckedRepo { repo, verdict });
    }

    pub fn record_notification_failure(&mut self, repo_name: &str, error: impl ToString) {
        self.notification_failures.push(NotificationFailure {
            repo_name: repo_name.to_string(),
            error: error.to_string(),
        });
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Names of repositories that raised an alarm, in listing order
    pub fn alarmed(&self) -> Vec<&str> {
        self.checked
            .iter()
            .filter(|c| c.verdict == Verdict::Alarm)
            .map(|c| c.repo.name.as_str())
            .collect()
    }

    pub fn summary(&self) -> AuditSummary {
        let alarm_count = self.checked.iter().filter(|c| c.verdict == Verdict::Alarm).count();
        AuditSummary {
            checked_count: self.checked.len(),
            ok_count: self.checked.len() - alarm_count,
            alarm_count,
            notification_failure_count: self.notification_failures.len(),
            listing_failed: self.listing_failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditSummary {
    pub checked_count: usize,
    pub ok_count: usize,
    pub alarm_count: usize,
    pub notification_failure_count: usize,
    pub listing_failed: bool,
}

impl AuditSummary {
    pub fn has_alarms(&self) -> bool {
        self.alarm_count > 0
    }

    /// Alarms whose Slack notification went through
    pub fn delivered_alarms(&self) -> usize {
        self.alarm_count.saturating_sub(self.notification_failure_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepositoryDescriptor {
        RepositoryDescriptor {
            name: name.to_string(),
            url: format!("https://github.com/acme/{}", name),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = AuditReport::new("acme");
        let summary = report.summary();

        assert_eq!(summary.checked_count, 0);
        assert!(!summary.has_alarms());
        assert!(!summary.listing_failed);
        assert!(report.finished_at.is_none());
    }

    #[test]
    fn test_summary_counts() {
        let mut report = AuditReport::new("acme");
        report.record(repo("alpha"), Verdict::Ok);
        report.record(repo("gamma"), Verdict::Alarm);
        report.record(repo("delta"), Verdict::Alarm);
        report.record_notification_failure("delta", "Slack webhook returned 500");
        report.finish();

        let summary = report.summary();
        assert_eq!(summary.checked_count, 3);
        assert_eq!(summary.ok_count, 1);
        assert_eq!(summary.alarm_count, 2);
        assert_eq!(summary.notification_failure_count, 1);
        assert_eq!(summary.delivered_alarms(), 1);
        assert!(summary.has_alarms());

        assert_eq!(report.alarmed(), vec!["gamma", "delta"]);
        assert!(report.finished_at.unwrap() >= report.started_at);
        assert_eq!(report.notification_failures[0].repo_name, "delta");
    }
}
