//! Process command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, STDIN_PATTERN};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use kugiri_core::{Document, SegmentationConfig, Sentence, SentenceExtractor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Language code (overrides the configuration file)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Variant within the language, e.g. hankaku or zenkaku2
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Segmentation configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not split inside brackets and quotes
    #[arg(long)]
    pub suppress_enclosures: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Sentences of one input, or why it failed
struct Outcome {
    name: String,
    sentences: Result<Vec<Sentence>>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = self.segmentation_config()?;
        let catalog = config.catalog();
        log::info!(
            "Using symbol table {}/{} ({} symbols)",
            catalog.language(),
            catalog.variant(),
            catalog.len()
        );
        // Shared by stdin and every worker.
        let extractor = SentenceExtractor::with_options(&catalog, &config.extractor);

        let files = resolve_patterns(&self.input)?;
        let read_stdin = self.input.iter().any(|p| p == STDIN_PATTERN);
        if files.is_empty() && !read_stdin {
            return Err(CliError::NoInputs.into());
        }

        let mut outcomes = Vec::with_capacity(files.len() + 1);
        if read_stdin {
            let sentences =
                FileReader::read_stdin().map(|document| extract(&extractor, &document));
            outcomes.push(Outcome {
                name: "<stdin>".to_string(),
                sentences,
            });
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count())
            .build()
            .context("Failed to start worker threads")?;

        let file_outcomes: Vec<Outcome> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let name = path.display().to_string();
                    let sentences = FileReader::read_document(path)
                        .map(|document| extract(&extractor, &document));
                    progress.file_completed(&name);
                    Outcome { name, sentences }
                })
                .collect()
        });
        progress.finish();
        outcomes.extend(file_outcomes);

        self.write_outcomes(&outcomes)
    }

    /// Load the configuration file, then apply command-line overrides
    fn segmentation_config(&self) -> Result<SegmentationConfig> {
        let mut config = match &self.config {
            Some(path) => SegmentationConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
            None => SegmentationConfig::default(),
        };

        if let Some(language) = &self.language {
            config.lang = language.clone();
            // A variant from the file belongs to the file's language.
            if self.variant.is_none() {
                config.variant = None;
            }
        }
        if let Some(variant) = &self.variant {
            config.variant = Some(variant.clone());
        }
        if self.suppress_enclosures {
            config.extractor.enclosure_suppression = true;
        }
        Ok(config)
    }

    fn thread_count(&self) -> usize {
        self.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get)
    }

    /// Write results in input order; failed inputs are reported and skipped
    fn write_outcomes(&self, outcomes: &[Outcome]) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.format.formatter(writer);

        let mut failed = 0;
        let mut total_sentences = 0;
        for outcome in outcomes {
            match &outcome.sentences {
                Ok(sentences) => {
                    if outcomes.len() > 1 {
                        formatter.begin_document(&outcome.name)?;
                    }
                    for sentence in sentences {
                        formatter.format_sentence(sentence)?;
                    }
                    total_sentences += sentences.len();
                }
                Err(e) => {
                    failed += 1;
                    log::debug!("Skipping {}", outcome.name);
                    eprintln!("Error: {e:#}");
                }
            }
        }
        formatter.finish()?;

        log::info!(
            "Extracted {total_sentences} sentences from {} input(s)",
            outcomes.len() - failed
        );

        if failed > 0 {
            return Err(CliError::InputsFailed {
                failed,
                total: outcomes.len(),
            }
            .into());
        }
        Ok(())
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
            // Already initialized when called more than once in-process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn extract(extractor: &SentenceExtractor, document: &Document) -> Vec<Sentence> {
    let sentences: Vec<Sentence> = extractor.extract_document(document).collect();
    log::debug!(
        "{}: {} sentences",
        document.name().unwrap_or("<input>"),
        sentences.len()
    );
    sentences
}
