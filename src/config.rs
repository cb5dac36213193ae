use std::path::PathBuf;

use crate::error::{AppError, Result};

const DEFAULT_BASE_BRANCH: &str = "main";
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Runtime configuration, assembled from the environment once at startup.
///
/// Constructed in `main` and passed by reference into every operation, so
/// nothing below the entry point reads the process environment.
#[derive(Clone)]
pub struct Config {
    /// Bearer token used for every API call.
    pub token: String,
    /// Repository identifier in `owner/name` form.
    pub repo: String,
    /// Branch whose CI health gates everything else.
    pub base_branch: String,
    /// Event that triggered this invocation, if running under Actions.
    pub event_name: Option<String>,
    /// Fully qualified ref the event ran against.
    pub ref_name: Option<String>,
    /// API base URL; overridable for GHES and tests.
    pub api_base: String,
    /// Step-output file path, when the runner provides one.
    pub output_path: Option<PathBuf>,
}

// Manual Debug impl to avoid leaking the token
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"[REDACTED]")
            .field("repo", &self.repo)
            .field("base_branch", &self.base_branch)
            .field("event_name", &self.event_name)
            .field("ref_name", &self.ref_name)
            .field("api_base", &self.api_base)
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any name -> value lookup.
    ///
    /// Every missing required variable is reported by name in one error, so
    /// a misconfigured job surfaces the whole problem at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("GITHUB_TOKEN").filter(|v| !v.is_empty());
        let repo = lookup("GITHUB_REPOSITORY").filter(|v| !v.is_empty());

        let mut missing = Vec::new();
        if token.is_none() {
            missing.push("GITHUB_TOKEN");
        }
        if repo.is_none() {
            missing.push("GITHUB_REPOSITORY");
        }

        match (token, repo) {
            (Some(token), Some(repo)) => Ok(Self {
                token,
                repo,
                base_branch: lookup("BASE_BRANCH")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string()),
                event_name: lookup("GITHUB_EVENT_NAME"),
                ref_name: lookup("GITHUB_REF"),
                api_base: lookup("GITHUB_API_URL")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                output_path: lookup("GITHUB_OUTPUT").map(PathBuf::from),
            }),
            _ => Err(AppError::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            ))),
        }
    }

    /// True when this invocation runs in a pull_request event context.
    pub fn is_pull_request_event(&self) -> bool {
        self.event_name.as_deref() == Some("pull_request")
    }

    /// True when this invocation runs on a push to the base branch.
    pub fn is_push_to_base(&self) -> bool {
        let base_ref = format!("refs/heads/{}", self.base_branch);
        self.event_name.as_deref() == Some("push")
            && self.ref_name.as_deref() == Some(base_ref.as_str())
    }
}
