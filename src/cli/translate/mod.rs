//! Translate command - translates a selection of documents

use clap::Args;
use tracing::info;

use super::context::CommandContext;
use super::selection::DocumentSelection;
use crate::domain::translation::BatchResult;

#[derive(Args, Debug, Clone)]
pub struct TranslateArgs {
    #[command(flatten)]
    pub selection: DocumentSelection,
}

/// Run the batch and print its result as JSON
pub async fn run(args: TranslateArgs) -> anyhow::Result<()> {
    execute(CommandContext::init()?, args).await
}

async fn execute(context: CommandContext, args: TranslateArgs) -> anyhow::Result<()> {
    let result = translate(&context, &args.selection).await;

    // Metrics and spans are flushed on every exit path
    context.finish().await;
    let result = result?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.overall_success {
        anyhow::bail!(result.message());
    }

    info!("{}", result.message());
    Ok(())
}

async fn translate(
    context: &CommandContext,
    selection: &DocumentSelection,
) -> anyhow::Result<BatchResult> {
    let document_ids = selection.resolve().await?;
    let orchestrator = context.orchestrator(document_ids.len())?;

    Ok(orchestrator
        .run(selection.workspace_id(), &document_ids)
        .await?)
}
