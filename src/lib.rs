// Public modules
pub mod types;
pub mod error;
pub mod config;
pub mod allowlist;
pub mod github;
pub mod slack;
pub mod audit;
pub mod report;

// Re-export commonly used items
pub use types::*;
pub use error::AuditError;
pub use config::{load_config, load_config_with_env, EnvironmentProvider, SystemEnvironment, MockEnvironment};
pub use allowlist::{is_allowed, AllowedSet};
pub use github::list_public_repos;
pub use slack::{build_alarm_payload, send_to_slack};
pub use audit::Auditor;
pub use report::{AuditReport, AuditSummary};
