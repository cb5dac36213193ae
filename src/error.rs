use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("No completed workflow runs found for branch '{0}'")]
    NoCompletedRuns(String),

    #[error("Base branch '{0}' not found or has no workflow runs")]
    BranchNotFound(String),

    #[error("Wrong trigger: {0}")]
    WrongTrigger(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for AppError {
    fn from(e: octocrab::Error) -> Self {
        AppError::GitHubApi(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
