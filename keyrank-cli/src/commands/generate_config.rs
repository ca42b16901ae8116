//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", default_value = "xx")]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Fill in the function-word lists for your language");
        println!("2. Validate your configuration:");
        println!(
            "   keyrank validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for extraction:");
        println!(
            "   keyrank extract -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language configuration for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# Sentence segmentation
[sentences]
# Characters that end a sentence when followed by whitespace
terminators = [".", "!", "?"]

# Words whose trailing period does not end a sentence (without the period)
abbreviations = ["dr", "mr", "mrs", "etc", "e.g", "i.e"]

# Function words, all lowercase and without spaces
[function_words]
# Phrases containing one of these words anywhere are dropped
filtered_anywhere = ["is", "are", "was", "it", "he", "she", "they"]

# Phrases starting or ending with one of these words are dropped
filtered_at_beginning_and_ending = ["the", "a", "an", "of", "on", "in", "and", "or"]

# Phrases starting with one of these words are dropped
filtered_at_beginning = ["new", "good"]

# Phrases ending with one of these words are dropped
filtered_at_ending = ["first", "last"]

# Never relevant on their own, but allowed inside phrases
other = ["thing", "things"]
"#,
            code = self.language_code
        )
    }
}
