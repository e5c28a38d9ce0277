use azure_doc_translator::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Translate(args) => cli::translate::run(args).await,
        Command::Estimate(args) => cli::estimate::run(args).await,
    }
}
