use crate::checks::types::RerunSummary;
use crate::checks::{guard, notify, status};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputSink;
use crate::platform::Platform;

/// React to a base-branch update: confirm the branch is known to CI, report
/// its health, then fan the rerun trigger out across open pull requests.
///
/// The fan-out happens whether the base is green or red; when red, the
/// re-triggered runs are expected to fail and a warning says so up front.
pub async fn propagate_base_update(
    platform: &dyn Platform,
    output: &mut dyn OutputSink,
    config: &Config,
) -> Result<RerunSummary> {
    guard::ensure_branch_has_runs(platform, config).await?;

    let latest = status::latest_completed_run(platform, config).await?;
    if latest.is_green() {
        tracing::info!(
            "{} branch is green - open pull requests should pass on rerun",
            config.base_branch
        );
    } else {
        tracing::warn!(
            "{} branch is red - re-triggered runs are expected to fail",
            config.base_branch
        );
    }

    notify::rerun_open_pull_requests(platform, output, config).await
}
