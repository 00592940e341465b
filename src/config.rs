use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::EvalError;

/// Run configuration loaded from a YAML document.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalConfig {
    pub evaluation: EvaluationSection,
    pub data: DataSection,
}

/// Scoring model, threshold, and the metric names to register.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationSection {
    pub model: String,
    pub threshold: f64,
    pub metrics: Vec<String>,
}

/// Where the transcript source lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSection {
    pub input: PathBuf,
}

impl EvalConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, EvalError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, EvalError> {
        Ok(serde_yaml::from_str(contents)?)
    }
}
