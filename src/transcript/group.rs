use std::collections::HashMap;

use crate::error::EvalError;

use super::record::InteractionRecord;

/// Records partitioned by conversation identifier.
///
/// Within a group, records keep their original log order. Groups iterate in
/// first-seen order of their conversation ids, so output stays deterministic
/// for a given source file.
#[derive(Debug, Default)]
pub struct ConversationGroups {
    entries: Vec<(String, Vec<InteractionRecord>)>,
    index: HashMap<String, usize>,
}

impl ConversationGroups {
    /// Number of distinct conversations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records of one conversation, in log order.
    pub fn get(&self, conversation_id: &str) -> Option<&[InteractionRecord]> {
        self.index
            .get(conversation_id)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Iterates over `(conversation_id, records)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[InteractionRecord])> {
        self.entries
            .iter()
            .map(|(id, records)| (id.as_str(), records.as_slice()))
    }

    fn push(&mut self, conversation_id: String, record: InteractionRecord) {
        match self.index.get(&conversation_id) {
            Some(&position) => self.entries[position].1.push(record),
            None => {
                self.index
                    .insert(conversation_id.clone(), self.entries.len());
                self.entries.push((conversation_id, vec![record]));
            }
        }
    }
}

/// Partitions records into conversation groups.
///
/// A record without a conversation identifier fails with `MalformedRecord`.
/// Empty input yields empty groups.
pub fn group_by_conversation<I>(records: I) -> Result<ConversationGroups, EvalError>
where
    I: IntoIterator<Item = InteractionRecord>,
{
    let mut groups = ConversationGroups::default();
    for record in records {
        let conversation_id = record.conversation_id()?.to_string();
        groups.push(conversation_id, record);
    }
    Ok(groups)
}
