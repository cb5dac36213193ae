use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use greenlight::checks::{notify, propagate, status};
use greenlight::config::Config;
use greenlight::error::{AppError, Result};
use greenlight::output::StepOutput;
use greenlight::platform::github::GitHubPlatform;

#[derive(Parser)]
#[command(
    name = "greenlight",
    about = "Gate merges on base-branch CI status and re-trigger open pull request runs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether the base branch's latest completed run succeeded.
    Status,
    /// Fail unless the base branch is green; for use on pull_request events.
    Gate,
    /// Re-trigger the latest workflow run of every open pull request.
    Notify,
    /// Check the base branch after a push to it, then re-trigger every open
    /// pull request's latest run.
    Propagate,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<bool> {
    let config = Config::from_env()?;
    let platform = GitHubPlatform::new(&config)?;
    let mut output = StepOutput::new(config.output_path.as_deref());

    match command {
        Command::Status => status::check_base_status(&platform, &mut output, &config).await,
        Command::Gate => {
            if !config.is_pull_request_event() {
                return Err(AppError::WrongTrigger(
                    "the gate command only runs on pull_request events".to_string(),
                ));
            }
            status::gate_on_base_status(&platform, &config).await
        }
        Command::Notify => {
            // best-effort fan-out: partial failure lands in rerun-status,
            // not in the exit code
            notify::rerun_open_pull_requests(&platform, &mut output, &config).await?;
            Ok(true)
        }
        Command::Propagate => {
            if !config.is_push_to_base() {
                return Err(AppError::WrongTrigger(format!(
                    "the propagate command only runs on pushes to '{}'",
                    config.base_branch
                )));
            }
            propagate::propagate_base_update(&platform, &mut output, &config).await?;
            Ok(true)
        }
    }
}
