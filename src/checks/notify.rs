use crate::checks::types::RerunSummary;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputSink;
use crate::platform::types::RunFilter;
use crate::platform::Platform;

/// Re-trigger the latest workflow run of every open pull request.
///
/// Best-effort fan-out: a pull request with no located run is skipped, a
/// rejected rerun is counted as a failure, and neither stops the loop. The
/// aggregate `rerun-status` is "success" only when every attempted trigger
/// was accepted.
pub async fn rerun_open_pull_requests(
    platform: &dyn Platform,
    output: &mut dyn OutputSink,
    config: &Config,
) -> Result<RerunSummary> {
    let pull_requests = platform.list_open_pull_requests(&config.repo).await?;

    let mut summary = RerunSummary::default();

    if pull_requests.is_empty() {
        tracing::info!("No open pull requests found");
    } else {
        tracing::info!(
            "Found {} open pull requests - triggering reruns",
            pull_requests.len()
        );

        for pr in &pull_requests {
            let runs = match platform
                .list_workflow_runs(&config.repo, &pr.head_branch, RunFilter::Any)
                .await
            {
                Ok(runs) => runs,
                Err(e) => {
                    tracing::warn!(
                        "Error fetching workflow runs for PR #{} ({}): {e}",
                        pr.number,
                        pr.head_branch
                    );
                    continue;
                }
            };

            // newest first, so the first run is the one to re-trigger
            let Some(latest) = runs.first() else {
                tracing::info!(
                    "No workflow runs found for PR #{} ({})",
                    pr.number,
                    pr.head_branch
                );
                continue;
            };

            match platform.rerun_workflow_run(&config.repo, latest.id).await {
                Ok(()) => {
                    summary.triggered += 1;
                    tracing::info!("Triggered rerun for PR #{} ({})", pr.number, pr.head_branch);
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        "Failed to trigger rerun for PR #{} ({}): {e}",
                        pr.number,
                        pr.head_branch
                    );
                }
            }
        }
    }

    tracing::info!("Triggered {} pull request reruns", summary.triggered);
    output.record("rerun-count", &summary.triggered.to_string())?;
    output.record("rerun-status", summary.status())?;

    Ok(summary)
}
