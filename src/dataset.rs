use serde::Serialize;

use crate::error::EvalError;
use crate::transcript::InteractionRecord;
use crate::ToolCall;

/// A normalized, replay-ready execution built from one interaction record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Golden {
    /// The prompt given to the agent
    pub input: String,
    /// The agent's recorded final response
    pub actual_output: String,
    /// Tool invocations flattened across all steps, in step order then
    /// within-step order
    pub tools_called: Vec<ToolCall>,
}

impl Golden {
    /// Builds exactly one golden from a record.
    ///
    /// Missing `task` or response fields fail with `MalformedRecord`. A step
    /// with zero tools contributes nothing to `tools_called`.
    pub fn from_record(record: &InteractionRecord) -> Result<Self, EvalError> {
        let input = record
            .task
            .clone()
            .ok_or_else(|| EvalError::MalformedRecord("record has no task".to_string()))?;
        let actual_output = record
            .response
            .clone()
            .ok_or_else(|| EvalError::MalformedRecord("record has no response".to_string()))?;
        let tools_called = record
            .step
            .iter()
            .flat_map(|step| step.tool.iter().cloned())
            .collect();

        Ok(Self {
            input,
            actual_output,
            tools_called,
        })
    }

    /// Names of the invoked tools, in call order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools_called.iter().map(ToolCall::name).collect()
    }
}

/// An ordered batch of goldens handed to the evaluation runner.
#[derive(Debug, Clone, Default)]
pub struct EvaluationDataset {
    goldens: Vec<Golden>,
}

impl EvaluationDataset {
    pub fn new(goldens: Vec<Golden>) -> Self {
        Self { goldens }
    }

    /// Builds one golden per record, preserving record order.
    pub fn from_records<'a, I>(records: I) -> Result<Self, EvalError>
    where
        I: IntoIterator<Item = &'a InteractionRecord>,
    {
        let goldens = records
            .into_iter()
            .map(Golden::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { goldens })
    }

    pub fn len(&self) -> usize {
        self.goldens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goldens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Golden> {
        self.goldens.iter()
    }

    pub fn goldens(&self) -> &[Golden] {
        &self.goldens
    }
}
