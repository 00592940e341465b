use crate::dataset::EvaluationDataset;
use crate::error::EvalError;
use crate::metrics::{Applicability, MetricDescriptor, MetricRegistry};
use crate::scoring::ScoringProvider;

use super::results::EvalResults;
use super::trace::EvaluationTrace;

/// Replays golden units through the scoring provider and aggregates the
/// per-metric score lists.
pub struct EvaluationRunner<'a> {
    registry: &'a MetricRegistry,
    provider: &'a dyn ScoringProvider,
}

impl<'a> EvaluationRunner<'a> {
    pub fn new(registry: &'a MetricRegistry, provider: &'a dyn ScoringProvider) -> Self {
        Self { registry, provider }
    }

    /// Evaluates every golden in the dataset with each application-tagged
    /// metric.
    ///
    /// Units replay strictly one at a time: the unit's trace is built, each
    /// metric's score for that trace is read to completion, and only then
    /// does the next unit start. A successful run over N units and M
    /// metrics returns exactly M keys of N scores each, in replay order.
    ///
    /// A provider failure aborts the batch: the error is returned as
    /// `ScoringFailure` tagged with the metric name and unit index, and no
    /// partial aggregate is exposed.
    pub async fn evaluate_application(
        &self,
        dataset: &EvaluationDataset,
    ) -> Result<EvalResults, EvalError> {
        let metrics = self.registry.metrics_for(Applicability::Application);
        let mut results =
            EvalResults::with_metrics(metrics.iter().map(|descriptor| descriptor.name()));

        for (index, golden) in dataset.iter().enumerate() {
            let trace = EvaluationTrace::from_golden(golden);
            log::debug!(
                "replaying unit {index} ({} tool calls)",
                trace.tools_called.len()
            );
            for descriptor in metrics.iter().copied() {
                let score = self
                    .provider
                    .score(&trace, descriptor)
                    .await
                    .map_err(|err| scoring_failure(descriptor, index, err))?;
                results.push(descriptor.name(), score);
            }
        }

        Ok(results)
    }
}

fn scoring_failure(descriptor: &MetricDescriptor, unit_index: usize, err: EvalError) -> EvalError {
    EvalError::ScoringFailure {
        metric: descriptor.name().to_string(),
        unit_index,
        reason: err.to_string(),
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
