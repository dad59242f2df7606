use anyhow::{anyhow, Result};
use std::collections::HashMap;
use crate::allowlist::AllowedSet;
use crate::types::{Config, ErrorPolicy, DEFAULT_GITHUB_API_URL};

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn load_config() -> Result<Config> {
    load_config_with_env(&SystemEnvironment)
}

/// Missing variables become empty strings unless the strict policy is
/// selected, in which case the org name and webhook URL are required.
pub fn load_config_with_env<E: EnvironmentProvider>(env: &E) -> Result<Config> {
    let error_policy = env.get_var("AUDIT_STRICT")
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "True"))
        .map(|strict| if strict { ErrorPolicy::Strict } else { ErrorPolicy::Lenient })
        .unwrap_or_default();

    let github_org_name = env.get_var("GITHUB_ORG_NAME").unwrap_or_default();
    let slack_url = env.get_var("SLACK_URL").unwrap_or_default();
    let slack_channel = env.get_var("SLACK_CHANNEL").unwrap_or_default();
    let allowed_repos = AllowedSet::parse(&env.get_var("ALLOWED_REPOS").unwrap_or_default());

    let github_api_url = env.get_var("GITHUB_API_URL")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    if error_policy == ErrorPolicy::Strict {
        if github_org_name.is_empty() {
            return Err(anyhow!("GITHUB_ORG_NAME env var must be set when AUDIT_STRICT is enabled"));
        }
        if slack_url.is_empty() {
            return Err(anyhow!("SLACK_URL env var must be set when AUDIT_STRICT is enabled"));
        }
    }

    Ok(Config {
        github_org_name,
        allowed_repos,
        slack_url,
        slack_channel,
        github_api_url,
        error_policy,
    })
}
