use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::EvalError;

use super::record::InteractionRecord;

/// Reads a JSON Lines transcript, one record per non-blank line.
///
/// Blank lines are skipped. A line that does not parse as a record fails
/// with `MalformedRecord` carrying the line number.
pub fn read_jsonl(path: impl AsRef<Path>) -> Result<Vec<InteractionRecord>, EvalError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: InteractionRecord = serde_json::from_str(line).map_err(|err| {
            EvalError::MalformedRecord(format!("line {}: {err}", number + 1))
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Reads a whole-document JSON array of records. Empty files are rejected.
pub fn read_json(path: impl AsRef<Path>) -> Result<Vec<InteractionRecord>, EvalError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let contents = contents.trim();
    if contents.is_empty() {
        return Err(EvalError::MalformedRecord(format!(
            "{} is empty",
            path.display()
        )));
    }
    Ok(serde_json::from_str(contents)?)
}
