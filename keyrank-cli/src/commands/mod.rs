//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod extract;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract ranked keyphrases from text files
    Extract(extract::ExtractArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate an external language table
    Validate(validate::ValidateArgs),

    /// Generate a language table template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language tables
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed by the list command
    pub fn render(&self) -> String {
        match self {
            ListCommands::Languages => {
                let mut out = String::from("Available languages:\n");
                for (code, name) in keyrank_core::supported_languages() {
                    out.push_str(&format!("  {code:<4}{name}\n"));
                }
                out
            }
            ListCommands::Formats => String::from(
                "Available output formats:\n  \
                 text      Ranked keyphrases, one per line\n  \
                 json      JSON array of documents with metadata\n  \
                 markdown  Markdown table per document\n",
            ),
        }
    }
}
