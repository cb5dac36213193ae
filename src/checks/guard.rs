use crate::config::Config;
use crate::error::{AppError, Result};
use crate::platform::types::RunFilter;
use crate::platform::Platform;

/// Confirm the base branch is known to CI before doing anything else.
///
/// Does not care whether any run succeeded, only that at least one exists.
/// A listing failure is treated the same as an empty list so that a
/// misconfigured branch name surfaces as one clear message.
pub async fn ensure_branch_has_runs(platform: &dyn Platform, config: &Config) -> Result<()> {
    let runs = match platform
        .list_workflow_runs(&config.repo, &config.base_branch, RunFilter::Any)
        .await
    {
        Ok(runs) => runs,
        Err(e) => {
            tracing::warn!("Listing runs for '{}' failed: {e}", config.base_branch);
            Vec::new()
        }
    };

    if runs.is_empty() {
        return Err(AppError::BranchNotFound(config.base_branch.clone()));
    }

    Ok(())
}
