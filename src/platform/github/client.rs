use async_trait::async_trait;
use octocrab::Octocrab;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::platform::types::*;
use crate::platform::Platform;

use super::mapper;

pub struct GitHubPlatform {
    client: Octocrab,
}

impl GitHubPlatform {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Octocrab::builder()
            .base_uri(config.api_base.as_str())
            .map_err(|e| {
                AppError::Config(format!("Invalid API base URL '{}': {e}", config.api_base))
            })?
            .personal_token(config.token.clone())
            .build()
            .map_err(|e| AppError::GitHubApi(format!("Failed to build octocrab client: {e}")))?;

        Ok(Self { client })
    }

    fn parse_repo(repo_full_name: &str) -> Result<(&str, &str)> {
        let parts: Vec<&str> = repo_full_name.splitn(2, '/').collect();
        if parts.len() != 2 {
            return Err(AppError::GitHubApi(format!(
                "Invalid repo name: {repo_full_name}"
            )));
        }
        Ok((parts[0], parts[1]))
    }
}

#[async_trait]
impl Platform for GitHubPlatform {
    async fn list_workflow_runs(
        &self,
        repo: &str,
        branch: &str,
        filter: RunFilter,
    ) -> Result<Vec<WorkflowRun>> {
        let (owner, repo_name) = Self::parse_repo(repo)?;

        let workflows = self.client.workflows(owner, repo_name);
        let mut request = workflows.list_all_runs().branch(branch);
        if filter == RunFilter::Completed {
            request = request.status("completed");
        }

        let page = request.send().await.map_err(|e| {
            AppError::GitHubApi(format!("Failed to list workflow runs for '{branch}': {e}"))
        })?;

        Ok(page.items.into_iter().map(mapper::map_workflow_run).collect())
    }

    async fn list_open_pull_requests(&self, repo: &str) -> Result<Vec<PullRequestHead>> {
        let (owner, repo_name) = Self::parse_repo(repo)?;

        let page = self
            .client
            .pulls(owner, repo_name)
            .list()
            .state(octocrab::params::State::Open)
            .send()
            .await
            .map_err(|e| AppError::GitHubApi(format!("Failed to list open pull requests: {e}")))?;

        Ok(page.items.into_iter().map(mapper::map_pull_request).collect())
    }

    async fn rerun_workflow_run(&self, repo: &str, run_id: u64) -> Result<()> {
        let (owner, repo_name) = Self::parse_repo(repo)?;

        // octocrab doesn't model the rerun endpoint, use the API directly
        let url = format!("/repos/{owner}/{repo_name}/actions/runs/{run_id}/rerun");
        let response = self
            .client
            ._post(url, None::<&()>)
            .await
            .map_err(|e| AppError::GitHubApi(format!("Failed to request rerun of run {run_id}: {e}")))?;

        // the rerun endpoint answers 201 Created when the rerun is queued
        let status = response.status();
        if status.as_u16() != 201 {
            return Err(AppError::GitHubApi(format!(
                "Rerun of run {run_id} rejected with HTTP {status}"
            )));
        }

        Ok(())
    }
}
