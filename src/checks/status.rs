use crate::config::Config;
use crate::error::{AppError, Result};
use crate::output::OutputSink;
use crate::platform::types::{RunFilter, WorkflowRun};
use crate::platform::Platform;

/// Most recent completed run for the base branch.
///
/// The runs index returns newest first, so the first element is the latest.
/// An empty list means the check is indeterminate and is an error; callers
/// must never read it as green.
pub async fn latest_completed_run(
    platform: &dyn Platform,
    config: &Config,
) -> Result<WorkflowRun> {
    let runs = platform
        .list_workflow_runs(&config.repo, &config.base_branch, RunFilter::Completed)
        .await?;

    runs.into_iter()
        .next()
        .ok_or_else(|| AppError::NoCompletedRuns(config.base_branch.clone()))
}

/// Check whether the base branch is green and record the verdict as a
/// step output.
pub async fn check_base_status(
    platform: &dyn Platform,
    output: &mut dyn OutputSink,
    config: &Config,
) -> Result<bool> {
    let latest = latest_completed_run(platform, config).await?;

    tracing::info!(
        name = %latest.name,
        status = %latest.status,
        conclusion = latest.conclusion.as_deref().unwrap_or("none"),
        created_at = %latest.created_at,
        "Latest workflow run on '{}'",
        config.base_branch
    );

    let is_green = latest.is_green();
    tracing::info!(
        "{} branch is {}",
        config.base_branch,
        if is_green { "GREEN" } else { "RED" }
    );

    output.record("is-main-green", if is_green { "true" } else { "false" })?;
    Ok(is_green)
}

/// Merge-gate variant: same verdict, log-only.
pub async fn gate_on_base_status(platform: &dyn Platform, config: &Config) -> Result<bool> {
    let latest = latest_completed_run(platform, config).await?;
    let is_green = latest.is_green();

    if is_green {
        tracing::info!(
            "{} is green - pull requests can be merged",
            config.base_branch
        );
    } else {
        tracing::warn!(
            "{} is not green (conclusion: {}) - fix {} first",
            config.base_branch,
            latest.conclusion.as_deref().unwrap_or("unknown"),
            config.base_branch
        );
    }

    Ok(is_green)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryOutput;
    use crate::platform::testing::{run, FakePlatform};

    fn config() -> Config {
        Config::from_lookup(|name| match name {
            "GITHUB_TOKEN" => Some("t".to_string()),
            "GITHUB_REPOSITORY" => Some("acme/widgets".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn green_run_records_true() {
        let platform =
            FakePlatform::with_runs("main", vec![run(1, "main", "completed", Some("success"))]);
        let mut output = MemoryOutput::default();

        let verdict = check_base_status(&platform, &mut output, &config())
            .await
            .unwrap();

        assert!(verdict);
        assert_eq!(output.get("is-main-green"), Some("true"));
    }

    #[tokio::test]
    async fn failed_run_records_false() {
        let platform =
            FakePlatform::with_runs("main", vec![run(1, "main", "completed", Some("failure"))]);
        let mut output = MemoryOutput::default();

        let verdict = check_base_status(&platform, &mut output, &config())
            .await
            .unwrap();

        assert!(!verdict);
        assert_eq!(output.get("is-main-green"), Some("false"));
    }

    #[tokio::test]
    async fn cancelled_run_is_red() {
        let platform =
            FakePlatform::with_runs("main", vec![run(1, "main", "completed", Some("cancelled"))]);
        let mut output = MemoryOutput::default();

        let verdict = check_base_status(&platform, &mut output, &config())
            .await
            .unwrap();

        assert!(!verdict);
    }

    #[tokio::test]
    async fn no_runs_is_an_error_never_green() {
        let platform = FakePlatform::default();
        let mut output = MemoryOutput::default();

        let err = check_base_status(&platform, &mut output, &config())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NoCompletedRuns(branch) if branch == "main"));
        assert!(output.records.is_empty());
    }

    #[tokio::test]
    async fn only_incomplete_runs_is_still_indeterminate() {
        let platform =
            FakePlatform::with_runs("main", vec![run(1, "main", "in_progress", None)]);
        let mut output = MemoryOutput::default();

        let err = check_base_status(&platform, &mut output, &config())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NoCompletedRuns(_)));
    }

    #[tokio::test]
    async fn verdict_depends_only_on_the_first_run() {
        let platform = FakePlatform::with_runs(
            "main",
            vec![
                run(3, "main", "completed", Some("failure")),
                run(2, "main", "completed", Some("success")),
                run(1, "main", "completed", Some("success")),
            ],
        );
        let mut output = MemoryOutput::default();

        let verdict = check_base_status(&platform, &mut output, &config())
            .await
            .unwrap();

        assert!(!verdict);
    }

    #[tokio::test]
    async fn repeated_checks_against_unchanged_state_agree() {
        let platform =
            FakePlatform::with_runs("main", vec![run(1, "main", "completed", Some("success"))]);
        let mut output = MemoryOutput::default();

        let first = check_base_status(&platform, &mut output, &config())
            .await
            .unwrap();
        let second = check_base_status(&platform, &mut output, &config())
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn gate_passes_on_green() {
        let platform =
            FakePlatform::with_runs("main", vec![run(1, "main", "completed", Some("success"))]);

        assert!(gate_on_base_status(&platform, &config()).await.unwrap());
    }

    #[tokio::test]
    async fn gate_fails_on_red() {
        let platform =
            FakePlatform::with_runs("main", vec![run(1, "main", "completed", Some("failure"))]);

        assert!(!gate_on_base_status(&platform, &config()).await.unwrap());
    }

    #[tokio::test]
    async fn respects_a_configured_base_branch() {
        let platform = FakePlatform::with_runs(
            "develop",
            vec![run(1, "develop", "completed", Some("success"))],
        );
        let config = Config::from_lookup(|name| match name {
            "GITHUB_TOKEN" => Some("t".to_string()),
            "GITHUB_REPOSITORY" => Some("acme/widgets".to_string()),
            "BASE_BRANCH" => Some("develop".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(gate_on_base_status(&platform, &config).await.unwrap());
    }
}
