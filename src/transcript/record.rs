use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::ToolCall;

/// One raw logged event from an agent transcript.
///
/// Fields required by later pipeline stages are optional at parse time so
/// that a missing field surfaces as [`EvalError::MalformedRecord`] from the
/// stage that needs it, not as a JSON error at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Conversation identity and timing metadata
    pub conversation_info: Option<ConversationInfo>,
    /// The prompt given to the agent
    pub task: Option<String>,
    /// The agent's final response. Source logs carry this under a localized
    /// key; both spellings are accepted.
    #[serde(alias = "시스템_response")]
    pub response: Option<String>,
    /// Execution steps, each listing the tools invoked during that step
    #[serde(default)]
    pub step: Vec<ExecutionStep>,
}

impl InteractionRecord {
    /// Conversation identifier, or `MalformedRecord` when the record
    /// carries none.
    pub fn conversation_id(&self) -> Result<&str, EvalError> {
        self.conversation_info
            .as_ref()
            .and_then(|info| info.conversation_id.as_deref())
            .ok_or_else(|| {
                EvalError::MalformedRecord("record has no conversation id".to_string())
            })
    }
}

/// Conversation metadata attached to each logged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationInfo {
    pub conversation_id: Option<String>,
    /// When the event was logged, if the source recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// One execution step with zero or more tool invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStep {
    #[serde(default)]
    pub tool: Vec<ToolCall>,
}
