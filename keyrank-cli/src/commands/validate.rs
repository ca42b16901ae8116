//! Validate command implementation

use anyhow::Result;
use clap::Args;
use keyrank_core::LanguageRules;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match LanguageRules::from_file(&self.language_config) {
            Ok(rules) => {
                let function_words = rules.function_words();
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", rules.code());
                println!("  Language name: {}", rules.name());
                println!("  Function words: {}", function_words.all().len());
                println!(
                    "    filtered anywhere: {}",
                    function_words.filtered_anywhere().len()
                );
                println!(
                    "    filtered at beginning and ending: {}",
                    function_words.filtered_at_beginning_and_ending().len()
                );
                println!(
                    "    filtered at beginning: {}",
                    function_words.filtered_at_beginning().len()
                );
                println!(
                    "    filtered at ending: {}",
                    function_words.filtered_at_ending().len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
