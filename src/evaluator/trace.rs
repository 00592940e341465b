use crate::dataset::Golden;
use crate::ToolCall;

/// Ephemeral record of one replayed execution, read by scoring
/// capabilities. Built per golden unit and dropped after its scoring
/// cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationTrace {
    /// The prompt the agent received
    pub input: String,
    /// The agent's final output
    pub output: String,
    /// Tools invoked during the execution, in call order
    pub tools_called: Vec<ToolCall>,
}

impl EvaluationTrace {
    pub fn from_golden(golden: &Golden) -> Self {
        Self {
            input: golden.input.clone(),
            output: golden.actual_output.clone(),
            tools_called: golden.tools_called.clone(),
        }
    }
}
