use serde::{Deserialize, Serialize};

/// Whether a metric scores whole-conversation behavior or individual tool
/// usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    /// High-level agent behavior: planning, step efficiency, task completion
    Application,
    /// Tool-calling correctness and argument validity
    Tool,
}

/// The fixed catalog of supported metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    PlanAdherence,
    PlanQuality,
    StepEfficiency,
    TaskCompletion,
    ArgumentCorrectness,
    ToolCorrectness,
}

impl MetricKind {
    /// Every metric in the catalog, in registration order.
    pub const CATALOG: [MetricKind; 6] = [
        MetricKind::PlanAdherence,
        MetricKind::PlanQuality,
        MetricKind::StepEfficiency,
        MetricKind::TaskCompletion,
        MetricKind::ArgumentCorrectness,
        MetricKind::ToolCorrectness,
    ];

    /// The metric's catalog name, used as the key in results and
    /// configuration.
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::PlanAdherence => "planAdherenceMetric",
            MetricKind::PlanQuality => "planQualityMetric",
            MetricKind::StepEfficiency => "stepEfficiencyMetric",
            MetricKind::TaskCompletion => "taskCompletionMetric",
            MetricKind::ArgumentCorrectness => "Argument Correctness",
            MetricKind::ToolCorrectness => "Tool Correctness",
        }
    }

    /// Resolves a catalog name back to its kind.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::CATALOG.iter().copied().find(|kind| kind.name() == raw)
    }

    pub fn applicability(self) -> Applicability {
        match self {
            MetricKind::PlanAdherence
            | MetricKind::PlanQuality
            | MetricKind::StepEfficiency
            | MetricKind::TaskCompletion => Applicability::Application,
            MetricKind::ArgumentCorrectness | MetricKind::ToolCorrectness => Applicability::Tool,
        }
    }
}
