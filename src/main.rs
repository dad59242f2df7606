use anyhow::{Context, Result};
use tracing::info;

use github_repo_auditor::{load_config, Auditor};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cfg = load_config()?;
    info!(
        "org = {:?}, allowed = {:?}, policy = {:?}",
        cfg.github_org_name,
        cfg.allowed_repos.sorted(),
        cfg.error_policy
    );

    let client = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let auditor = Auditor::new(&client, &cfg);
    let mut stdout = std::io::stdout();
    let report = auditor.run(&mut stdout).await?;

    let summary = report.summary();
    info!(
        "Audit summary: {} checked, {} ok, {} alarms ({} delivered)",
        summary.checked_count,
        summary.ok_count,
        summary.alarm_count,
        summary.delivered_alarms()
    );
    if summary.has_alarms() {
        info!("Alarmed repositories: {:?}", report.alarmed());
    }

    Ok(())
}

// Status lines own stdout, so diagnostics go to stderr.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
