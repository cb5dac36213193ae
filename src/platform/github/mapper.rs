use crate::platform::types;

/// Map an octocrab workflow run to our platform type.
pub fn map_workflow_run(run: octocrab::models::workflows::Run) -> types::WorkflowRun {
    types::WorkflowRun {
        id: run.id.into_inner(),
        name: run.name,
        status: run.status,
        conclusion: run.conclusion,
        created_at: run.created_at,
        head_branch: run.head_branch,
    }
}

/// Map an octocrab pull request down to the head data the checks consume.
pub fn map_pull_request(pr: octocrab::models::pulls::PullRequest) -> types::PullRequestHead {
    types::PullRequestHead {
        number: pr.number,
        head_branch: pr.head.ref_field.clone(),
    }
}
