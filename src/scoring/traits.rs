use async_trait::async_trait;

use crate::error::EvalError;
use crate::evaluator::EvaluationTrace;
use crate::metrics::MetricDescriptor;

/// Capability interface for computing metric scores from a replayed trace.
///
/// The runner calls `score` once per golden unit per metric and reads the
/// returned value immediately, so implementations need no shared
/// "current trace" state. Scores live in a provider-defined bounded range,
/// typically `[0, 1]`.
#[async_trait]
pub trait ScoringProvider: Send + Sync {
    async fn score(
        &self,
        trace: &EvaluationTrace,
        descriptor: &MetricDescriptor,
    ) -> Result<f64, EvalError>;
}
