//! Offline evaluation of recorded LLM agent conversations.
//!
//! This crate replays transcripts of tool-using agent sessions through a set
//! of configured evaluation metrics and aggregates the resulting scores per
//! metric. No live inference happens here: the agent's prompts, responses,
//! and tool calls are read back from logs, grouped by conversation, and
//! scored by an injected [`scoring::ScoringProvider`].
//!
//! The pipeline has four stages:
//!
//! 1. [`transcript`] loads raw interaction records (JSON Lines or a whole
//!    JSON document) and partitions them by conversation identifier.
//! 2. [`dataset`] normalizes each record into a replay-ready
//!    [`dataset::Golden`] with its flattened tool-call sequence.
//! 3. [`metrics`] resolves the requested metric names against the fixed
//!    catalog into an immutable [`metrics::MetricRegistry`].
//! 4. [`evaluator`] replays every golden one at a time, scores each replay
//!    with every application-tagged metric, and returns the per-metric
//!    score lists.
//!
//! ```no_run
//! use agenteval::{
//!     dataset::EvaluationDataset,
//!     evaluator::EvaluationRunner,
//!     metrics::MetricRegistry,
//!     scoring::FixedScorer,
//!     transcript::{group_by_conversation, read_jsonl},
//! };
//!
//! # async fn run() -> Result<(), agenteval::error::EvalError> {
//! let registry = MetricRegistry::new("gpt-4o", 0.7, &["taskCompletionMetric".to_string()])?;
//! let provider = FixedScorer::new(1.0);
//! let runner = EvaluationRunner::new(&registry, &provider);
//!
//! let records = read_jsonl("transcripts.jsonl")?;
//! for (conversation_id, records) in group_by_conversation(records)?.iter() {
//!     let dataset = EvaluationDataset::from_records(records)?;
//!     let results = runner.evaluate_application(&dataset).await?;
//!     println!("{conversation_id}: {results:?}");
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod metrics;
pub mod scoring;
pub mod transcript;

pub use error::EvalError;

/// A single tool invocation recorded in a transcript step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// The function the agent invoked
    pub function: FunctionCall,
}

impl ToolCall {
    /// Creates a tool call carrying only a function name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            function: FunctionCall {
                name: name.into(),
                arguments: None,
            },
        }
    }

    /// Name of the invoked function.
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// Function name and arguments of a recorded tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the function
    pub name: String,
    /// Arguments passed to the function, when the log recorded them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

/// Initializes logging (only available with the `logging` feature).
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
