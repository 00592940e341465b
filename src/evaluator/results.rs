use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Aggregated scores keyed by metric name.
///
/// Each metric maps to one score per evaluated golden unit, in replay
/// order. Entries keep metric registration order, and serialization emits
/// a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvalResults {
    entries: Vec<(String, Vec<f64>)>,
}

impl EvalResults {
    /// Pre-seeds one empty score list per metric name so a run over M
    /// metrics always produces exactly M keys.
    pub fn with_metrics<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names
                .into_iter()
                .map(|name| (name.into(), Vec::new()))
                .collect(),
        }
    }

    /// Appends a score to a metric's list, creating the entry if the name
    /// was not pre-seeded.
    pub fn push(&mut self, name: &str, score: f64) {
        match self.entries.iter_mut().find(|(entry, _)| entry == name) {
            Some((_, scores)) => scores.push(score),
            None => self.entries.push((name.to_string(), vec![score])),
        }
    }

    /// Scores recorded for one metric, in replay order.
    pub fn scores(&self, name: &str) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, scores)| scores.as_slice())
    }

    /// Number of metric entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(name, scores)| (name.as_str(), scores.as_slice()))
    }
}

impl Serialize for EvalResults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, scores) in &self.entries {
            map.serialize_entry(name, scores)?;
        }
        map.end()
    }
}
