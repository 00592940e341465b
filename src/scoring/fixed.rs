use async_trait::async_trait;

use crate::error::EvalError;
use crate::evaluator::EvaluationTrace;
use crate::metrics::MetricDescriptor;

use super::traits::ScoringProvider;

/// Scorer that returns the same score for every trace and metric.
///
/// Useful for offline dry runs and wiring tests; real providers live
/// outside this crate.
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer {
    score: f64,
}

impl FixedScorer {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

#[async_trait]
impl ScoringProvider for FixedScorer {
    async fn score(
        &self,
        _trace: &EvaluationTrace,
        _descriptor: &MetricDescriptor,
    ) -> Result<f64, EvalError> {
        Ok(self.score)
    }
}
