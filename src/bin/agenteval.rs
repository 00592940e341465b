use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use agenteval::config::EvalConfig;
use agenteval::dataset::EvaluationDataset;
use agenteval::evaluator::EvaluationRunner;
use agenteval::metrics::MetricRegistry;
use agenteval::scoring::FixedScorer;
use agenteval::transcript::{group_by_conversation, read_jsonl};

#[derive(Parser, Debug)]
#[command(
    name = "agenteval",
    about = "Replays recorded agent conversations through evaluation metrics"
)]
struct CliArgs {
    /// Path to the YAML run configuration
    #[arg(long, default_value = "agenteval.yml")]
    config_path: PathBuf,
    /// Fixed score reported for every replay (dry runs)
    #[arg(long, default_value_t = 1.0)]
    score: f64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let config = EvalConfig::from_yaml_file(&args.config_path)
        .with_context(|| format!("loading {}", args.config_path.display()))?;
    log::info!(
        "evaluating {} with model {}",
        config.data.input.display(),
        config.evaluation.model
    );

    let registry = MetricRegistry::new(
        config.evaluation.model.clone(),
        config.evaluation.threshold,
        &config.evaluation.metrics,
    )?;
    let provider = FixedScorer::new(args.score);
    let runner = EvaluationRunner::new(&registry, &provider);

    let records = read_jsonl(&config.data.input)
        .with_context(|| format!("reading {}", config.data.input.display()))?;
    let groups = group_by_conversation(records)?;

    for (conversation_id, group_records) in groups.iter() {
        let dataset = EvaluationDataset::from_records(group_records)?;
        let results = runner
            .evaluate_application(&dataset)
            .await
            .with_context(|| format!("evaluating conversation '{conversation_id}'"))?;
        println!("{conversation_id}\t{}", serde_json::to_string(&results)?);
    }

    Ok(())
}
