use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{PullRequestHead, RunFilter, WorkflowRun};
use super::Platform;
use crate::error::{AppError, Result};

/// Scripted in-memory platform for exercising check logic off the network.
#[derive(Default)]
pub struct FakePlatform {
    /// Runs per branch, newest first, as the real API returns them.
    pub runs: HashMap<String, Vec<WorkflowRun>>,
    pub pull_requests: Vec<PullRequestHead>,
    /// Branches whose run listing answers with an API error.
    pub failing_branches: Vec<String>,
    /// Run ids whose rerun request is rejected with a non-201 status.
    pub rejected_rerun_ids: Vec<u64>,
    /// Every rerun request received, in order.
    pub rerun_log: Mutex<Vec<u64>>,
}

impl FakePlatform {
    pub fn with_runs(branch: &str, runs: Vec<WorkflowRun>) -> Self {
        let mut platform = Self::default();
        platform.runs.insert(branch.to_string(), runs);
        platform
    }

    pub fn rerun_requests(&self) -> Vec<u64> {
        self.rerun_log.lock().unwrap().clone()
    }
}

/// Run fixture with a fixed timestamp; conclusion `None` means not finished.
pub fn run(id: u64, branch: &str, status: &str, conclusion: Option<&str>) -> WorkflowRun {
    WorkflowRun {
        id,
        name: "ci".to_string(),
        status: status.to_string(),
        conclusion: conclusion.map(str::to_string),
        created_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        head_branch: branch.to_string(),
    }
}

pub fn pull_request(number: u64, head_branch: &str) -> PullRequestHead {
    PullRequestHead {
        number,
        head_branch: head_branch.to_string(),
    }
}

#[async_trait]
impl Platform for FakePlatform {
    async fn list_workflow_runs(
        &self,
        _repo: &str,
        branch: &str,
        filter: RunFilter,
    ) -> Result<Vec<WorkflowRun>> {
        if self.failing_branches.iter().any(|b| b == branch) {
            return Err(AppError::GitHubApi(format!(
                "HTTP 500 listing runs for '{branch}'"
            )));
        }
        let runs = self.runs.get(branch).cloned().unwrap_or_default();
        Ok(match filter {
            RunFilter::Any => runs,
            RunFilter::Completed => runs
                .into_iter()
                .filter(|r| r.status == "completed")
                .collect(),
        })
    }

    async fn list_open_pull_requests(&self, _repo: &str) -> Result<Vec<PullRequestHead>> {
        Ok(self.pull_requests.clone())
    }

    async fn rerun_workflow_run(&self, _repo: &str, run_id: u64) -> Result<()> {
        self.rerun_log.lock().unwrap().push(run_id);
        if self.rejected_rerun_ids.contains(&run_id) {
            return Err(AppError::GitHubApi(format!(
                "Rerun of run {run_id} rejected with HTTP 403"
            )));
        }
        Ok(())
    }
}
