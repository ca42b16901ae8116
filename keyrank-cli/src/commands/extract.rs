//! Extract command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageSource;
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use keyrank_core::{Extraction, KeyphraseExtractor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language or locale code, e.g. "en" or "de_DE"
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// External language table (TOML), overrides --language
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of keyphrases per document
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Process files in parallel even when only one is given
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting keyphrase extraction");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&cli_config.output.default_format)?,
        };

        let extractor = self.build_extractor(&cli_config)?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s)", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = if self.parallel || files.len() > 1 {
            let threads = cli_config.performance.thread_count();
            log::debug!("Extracting in parallel with {} threads", threads);

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| extract_file(&extractor, path, &progress))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files
                .iter()
                .map(|path| extract_file(&extractor, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let pretty = cli_config.output.pretty_json;
        let mut formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                format.formatter(BufWriter::new(file), pretty)
            }
            None => format.formatter(io::stdout(), pretty),
        };

        for (path, extraction) in &results {
            formatter.format_document(&path.display().to_string(), extraction)?;
        }
        formatter.finish()
    }

    /// Merge command-line overrides into the configured extractor
    fn build_extractor(&self, cli_config: &CliConfig) -> Result<KeyphraseExtractor> {
        let mut config = cli_config.extraction.clone();
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(limit) = self.limit {
            config.result_limit = limit;
        }

        let source = LanguageSource::from_args(&config.language, self.language_config.as_ref());
        log::info!("Language: {}", source.display_name());
        let rules = source.load()?;

        KeyphraseExtractor::with_rules(config, rules)
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn extract_file(
    extractor: &KeyphraseExtractor,
    path: &Path,
    progress: &ProgressReporter,
) -> Result<(PathBuf, Extraction)> {
    let document = FileReader::read_document(path)?;
    let extraction = extractor.extract(&document.text);

    log::debug!(
        "{}: {} keyphrases in {:.2} ms",
        document.source(),
        extraction.len(),
        extraction.metadata.processing_time_ms
    );
    progress.file_completed(&document.source());

    Ok((document.path, extraction))
}
