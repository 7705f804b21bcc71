use std::path::PathBuf;

use crate::error::{BenchError, Result};

pub const SOURCES: [&str; 4] = ["canada", "citm_catalog", "citylots", "twitter"];
pub const REPETITIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub extension: String,
    pub sources: Vec<String>,
    pub repetitions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("../data"),
            extension: "json".to_string(),
            sources: SOURCES.iter().map(|s| s.to_string()).collect(),
            repetitions: REPETITIONS,
        }
    }
}

impl Config {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = sources.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// `<data_dir>/<name>.<extension>`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", name, self.extension))
    }

    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(BenchError::NoRepetitions);
        }
        if self.sources.is_empty() {
            return Err(BenchError::EmptyAggregate);
        }
        Ok(())
    }
}
