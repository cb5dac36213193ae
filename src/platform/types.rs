use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which runs to consult when listing a branch's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunFilter {
    /// Every recorded run, whatever its state.
    Any,
    /// Only runs that have finished and carry a conclusion.
    Completed,
}

/// One recorded execution of a CI pipeline, as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub name: String,
    /// queued, in_progress, completed, ...
    pub status: String,
    /// Populated only once the run has completed.
    pub conclusion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub head_branch: String,
}

impl WorkflowRun {
    /// A run is green only when it finished with a success conclusion;
    /// failure, cancelled, timed_out and absent all count as red.
    pub fn is_green(&self) -> bool {
        self.conclusion.as_deref() == Some("success")
    }
}

/// The source-branch side of an open pull request.
#[derive(Debug, Clone)]
pub struct PullRequestHead {
    pub number: u64,
    pub head_branch: String,
}
