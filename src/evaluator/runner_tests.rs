use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::EvaluationRunner;
use crate::dataset::{EvaluationDataset, Golden};
use crate::error::EvalError;
use crate::evaluator::EvaluationTrace;
use crate::metrics::{MetricDescriptor, MetricRegistry};
use crate::scoring::{FixedScorer, ScoringProvider};
use crate::transcript::{group_by_conversation, ConversationInfo, ExecutionStep, InteractionRecord};
use crate::ToolCall;

const APPLICATION_METRICS: [&str; 4] = [
    "planAdherenceMetric",
    "planQualityMetric",
    "stepEfficiencyMetric",
    "taskCompletionMetric",
];

/// Records every scoring call and returns the call sequence number as the
/// score, so tests can check which call produced which aggregate entry.
struct ScriptedScorer {
    calls: Arc<Mutex<Vec<(String, String)>>>,
    fail_on_input: Option<String>,
}

impl ScriptedScorer {
    fn new(calls: Arc<Mutex<Vec<(String, String)>>>) -> Self {
        Self {
            calls,
            fail_on_input: None,
        }
    }

    fn failing_on(calls: Arc<Mutex<Vec<(String, String)>>>, input: &str) -> Self {
        Self {
            calls,
            fail_on_input: Some(input.to_string()),
        }
    }
}

#[async_trait]
impl ScoringProvider for ScriptedScorer {
    async fn score(
        &self,
        trace: &EvaluationTrace,
        descriptor: &MetricDescriptor,
    ) -> Result<f64, EvalError> {
        if self.fail_on_input.as_deref() == Some(trace.input.as_str()) {
            return Err(EvalError::ProviderError("model unavailable".to_string()));
        }
        let mut calls = self.calls.lock().expect("calls lock");
        calls.push((descriptor.name().to_string(), trace.input.clone()));
        Ok((calls.len() - 1) as f64)
    }
}

fn booking_record(task: &str, response: &str, tool: &str) -> InteractionRecord {
    InteractionRecord {
        conversation_info: Some(ConversationInfo {
            conversation_id: Some("c1".to_string()),
            timestamp: None,
        }),
        task: Some(task.to_string()),
        response: Some(response.to_string()),
        step: vec![ExecutionStep {
            tool: vec![ToolCall::named(tool)],
        }],
    }
}

fn golden(input: &str) -> Golden {
    Golden {
        input: input.to_string(),
        actual_output: "ok".to_string(),
        tools_called: Vec::new(),
    }
}

fn registry(names: &[&str]) -> MetricRegistry {
    let requested: Vec<String> = names.iter().map(|name| name.to_string()).collect();
    MetricRegistry::new("gpt-4o", 0.7, &requested).expect("registry")
}

#[tokio::test]
async fn aggregate_has_one_score_per_unit_per_metric() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = ScriptedScorer::new(Arc::clone(&calls));
    let registry = registry(&APPLICATION_METRICS);
    let runner = EvaluationRunner::new(&registry, &provider);

    let dataset = EvaluationDataset::new(vec![golden("u0"), golden("u1"), golden("u2")]);
    let results = runner.evaluate_application(&dataset).await.expect("results");

    assert_eq!(results.len(), APPLICATION_METRICS.len());
    for (position, name) in APPLICATION_METRICS.iter().enumerate() {
        let scores = results.scores(name).expect("metric entry");
        // Call order is unit-major: unit i, metric j lands at call i*M + j.
        let expected: Vec<f64> = (0..3)
            .map(|unit| (unit * APPLICATION_METRICS.len() + position) as f64)
            .collect();
        assert_eq!(scores, expected.as_slice());
    }
}

#[tokio::test]
async fn units_replay_strictly_in_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = ScriptedScorer::new(Arc::clone(&calls));
    let registry = registry(&["planQualityMetric", "taskCompletionMetric"]);
    let runner = EvaluationRunner::new(&registry, &provider);

    let dataset = EvaluationDataset::new(vec![golden("u0"), golden("u1")]);
    runner.evaluate_application(&dataset).await.expect("results");

    let recorded = calls.lock().expect("calls lock").clone();
    let expected = vec![
        ("planQualityMetric".to_string(), "u0".to_string()),
        ("taskCompletionMetric".to_string(), "u0".to_string()),
        ("planQualityMetric".to_string(), "u1".to_string()),
        ("taskCompletionMetric".to_string(), "u1".to_string()),
    ];
    assert_eq!(recorded, expected);
}

#[tokio::test]
async fn scoring_failure_aborts_the_batch() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = ScriptedScorer::failing_on(Arc::clone(&calls), "u1");
    let registry = registry(&["taskCompletionMetric"]);
    let runner = EvaluationRunner::new(&registry, &provider);

    let dataset = EvaluationDataset::new(vec![golden("u0"), golden("u1"), golden("u2")]);
    let err = runner
        .evaluate_application(&dataset)
        .await
        .expect_err("fail fast");

    match err {
        EvalError::ScoringFailure {
            metric,
            unit_index,
            reason,
        } => {
            assert_eq!(metric, "taskCompletionMetric");
            assert_eq!(unit_index, 1);
            assert!(reason.contains("model unavailable"));
        }
        other => panic!("unexpected error: {other}"),
    }

    // No unit after the failing one was replayed.
    let recorded = calls.lock().expect("calls lock").clone();
    assert!(recorded.iter().all(|(_, input)| input != "u2"));
}

#[tokio::test]
async fn tool_tagged_metrics_are_not_replayed() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = ScriptedScorer::new(Arc::clone(&calls));
    let registry = registry(&["taskCompletionMetric", "Tool Correctness"]);
    let runner = EvaluationRunner::new(&registry, &provider);

    let dataset = EvaluationDataset::new(vec![golden("u0")]);
    let results = runner.evaluate_application(&dataset).await.expect("results");

    assert_eq!(results.len(), 1);
    assert!(results.scores("Tool Correctness").is_none());
    let recorded = calls.lock().expect("calls lock").clone();
    assert!(recorded.iter().all(|(metric, _)| metric != "Tool Correctness"));
}

#[tokio::test]
async fn booking_conversation_scores_both_records_in_order() {
    let records = vec![
        booking_record("book a flight", "done", "search_flights"),
        booking_record("cancel it", "cancelled", "cancel_flight"),
    ];
    let groups = group_by_conversation(records).expect("group");
    let (conversation_id, grouped) = groups.iter().next().expect("one group");
    assert_eq!(conversation_id, "c1");

    let dataset = EvaluationDataset::from_records(grouped).expect("dataset");
    assert_eq!(dataset.goldens()[0].tool_names(), ["search_flights"]);
    assert_eq!(dataset.goldens()[1].input, "cancel it");

    let registry = registry(&["taskCompletionMetric"]);
    let provider = FixedScorer::new(0.9);
    let runner = EvaluationRunner::new(&registry, &provider);
    let results = runner.evaluate_application(&dataset).await.expect("results");

    assert_eq!(results.len(), 1);
    assert_eq!(results.scores("taskCompletionMetric"), Some(&[0.9, 0.9][..]));
}

#[tokio::test]
async fn empty_dataset_keeps_metric_keys() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let provider = ScriptedScorer::new(Arc::clone(&calls));
    let registry = registry(&["planAdherenceMetric", "taskCompletionMetric"]);
    let runner = EvaluationRunner::new(&registry, &provider);

    let results = runner
        .evaluate_application(&EvaluationDataset::default())
        .await
        .expect("results");

    assert_eq!(results.len(), 2);
    assert_eq!(results.scores("planAdherenceMetric"), Some(&[][..]));
    assert!(calls.lock().expect("calls lock").is_empty());
}
