//! CLI module for the Azure document translator
//!
//! Provides subcommands operating on a selection of documents:
//! - `translate`: translate the source field and write the destination field
//! - `estimate`: price a translation of the selection

pub mod context;
pub mod estimate;
pub mod selection;
pub mod translate;

use clap::{Parser, Subcommand};

/// Azure document translator - batch translation of document text fields
#[derive(Parser)]
#[command(name = "azure-doc-translator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate the selected documents
    Translate(translate::TranslateArgs),

    /// Estimate the cost of translating the selected documents
    Estimate(estimate::EstimateArgs),
}
