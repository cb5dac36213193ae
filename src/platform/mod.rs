pub mod github;
#[cfg(test)]
pub mod testing;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::*;

#[async_trait]
pub trait Platform: Send + Sync {
    /// List workflow runs for a branch, newest first. First page only.
    async fn list_workflow_runs(
        &self,
        repo: &str,
        branch: &str,
        filter: RunFilter,
    ) -> Result<Vec<WorkflowRun>>;

    /// List open pull requests against the repository. First page only.
    async fn list_open_pull_requests(&self, repo: &str) -> Result<Vec<PullRequestHead>>;

    /// Request a fresh run of a previously recorded workflow run.
    ///
    /// Succeeds only when the API answers 201; any other status is an error.
    async fn rerun_workflow_run(&self, repo: &str, run_id: u64) -> Result<()>;
}
