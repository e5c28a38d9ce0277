//! Estimate command - prices the translation of a selection of documents

use clap::Args;

use super::context::CommandContext;
use super::selection::DocumentSelection;
use crate::domain::cost::CostEstimate;

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub selection: DocumentSelection,
}

/// Print the cost message for the selection
pub async fn run(args: EstimateArgs) -> anyhow::Result<()> {
    execute(CommandContext::init()?, args).await
}

async fn execute(context: CommandContext, args: EstimateArgs) -> anyhow::Result<()> {
    let estimate = estimate(&context, &args.selection).await;

    context.finish().await;

    println!("{}", estimate?.message());
    Ok(())
}

async fn estimate(
    context: &CommandContext,
    selection: &DocumentSelection,
) -> anyhow::Result<CostEstimate> {
    let document_ids = selection.resolve().await?;
    let orchestrator = context.orchestrator(document_ids.len())?;

    Ok(orchestrator
        .estimate(selection.workspace_id(), &document_ids)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::infrastructure::observability::PrometheusMetrics;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[tokio::test]
    async fn test_metrics_written_when_wiring_fails() {
        let dir = tempfile::tempdir().unwrap();
        let textfile = dir.path().join("estimate.prom");

        let mut config = AppConfig::default();
        config.translator.concurrency_width = 0;
        config.observability.metrics.enabled = true;
        config.observability.metrics.textfile_path = Some(textfile.clone());
        let metrics = PrometheusMetrics::from(PrometheusBuilder::new().build_recorder().handle());
        let context = CommandContext::new(config, Some(metrics));

        let args = EstimateArgs {
            selection: DocumentSelection {
                workspace: 7,
                documents: Some("3".to_string()),
                documents_file: None,
            },
        };

        let err = execute(context, args).await.unwrap_err();

        assert!(err.to_string().contains("concurrency width"));
        assert!(textfile.exists());
    }
}
