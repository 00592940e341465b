use crate::error::EvalError;

use super::kind::{Applicability, MetricKind};

/// A configured metric: catalog kind plus the scoring model and threshold
/// shared across the run. Built once at registry construction, never
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDescriptor {
    pub kind: MetricKind,
    /// Model identifier passed through to the scoring provider
    pub model: String,
    /// Pass/fail threshold passed through to the scoring provider
    pub threshold: f64,
    /// Ask the provider to include a reasoning string with the score
    pub include_reason: bool,
}

impl MetricDescriptor {
    fn new(kind: MetricKind, model: String, threshold: f64) -> Self {
        Self {
            kind,
            model,
            threshold,
            include_reason: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn applicability(&self) -> Applicability {
        self.kind.applicability()
    }
}

/// Immutable catalog of the metrics requested for one run.
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    descriptors: Vec<MetricDescriptor>,
}

impl MetricRegistry {
    /// Resolves the requested metric names against the fixed catalog.
    ///
    /// Fails with `UnknownMetric` on the first name the catalog does not
    /// contain, before any replay occurs. A name requested twice registers
    /// once.
    pub fn new(
        model: impl Into<String>,
        threshold: f64,
        requested: &[String],
    ) -> Result<Self, EvalError> {
        let model = model.into();
        let mut descriptors: Vec<MetricDescriptor> = Vec::with_capacity(requested.len());
        for name in requested {
            let kind = MetricKind::parse(name)
                .ok_or_else(|| EvalError::UnknownMetric(name.clone()))?;
            if descriptors.iter().any(|existing| existing.kind == kind) {
                log::warn!("Metric '{name}' requested more than once");
                continue;
            }
            descriptors.push(MetricDescriptor::new(kind, model.clone(), threshold));
        }
        Ok(Self { descriptors })
    }

    /// All registered descriptors, in registration order.
    pub fn descriptors(&self) -> &[MetricDescriptor] {
        &self.descriptors
    }

    /// Descriptors matching an applicability tag, in registration order.
    pub fn metrics_for(&self, tag: Applicability) -> Vec<&MetricDescriptor> {
        self.descriptors
            .iter()
            .filter(|descriptor| descriptor.applicability() == tag)
            .collect()
    }
}
