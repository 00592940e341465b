mod group;
mod loader;
mod record;

pub use group::{group_by_conversation, ConversationGroups};
pub use loader::{read_json, read_jsonl};
pub use record::{ConversationInfo, ExecutionStep, InteractionRecord};
