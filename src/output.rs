use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Destination for key=value results consumed by the surrounding pipeline.
pub trait OutputSink {
    /// Record a single key=value pair.
    fn record(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Step outputs the way GitHub Actions expects them: appended to the file
/// named by `GITHUB_OUTPUT`, or echoed to stdout when no file is configured.
pub struct StepOutput {
    path: Option<PathBuf>,
}

impl StepOutput {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl OutputSink for StepOutput {
    fn record(&mut self, key: &str, value: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{key}={value}")?;
            }
            None => println!("Output {key}={value}"),
        }
        Ok(())
    }
}

/// In-memory sink for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryOutput {
    pub records: Vec<(String, String)>,
}

#[cfg(test)]
impl MemoryOutput {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
impl OutputSink for MemoryOutput {
    fn record(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
