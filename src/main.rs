use std::path::{Path, PathBuf};
use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use parleval::config::ScoringConfig;
use parleval::evaluation::PronunciationScorer;
use parleval::report;
use parleval::types::TranscriptionResult;

/// Parleval - pronunciation evaluation tool
///
/// Scores a speech-to-text transcription of a spoken sentence against the
/// reference text: similarity metrics, word-level differences, sibilant
/// (lisp) severity, and a production-readiness verdict.
#[derive(Parser, Debug)]
#[command(name = "parleval")]
#[command(version = "0.1.0")]
#[command(about = "Pronunciation evaluation tool", long_about = None)]
struct Args {
    /// Path to the transcription JSON produced by the speech-to-text tool
    #[arg(value_name = "TRANSCRIPT", conflicts_with = "transcript_json")]
    transcript_file: Option<PathBuf>,

    /// Inline transcription JSON (instead of a file)
    #[arg(long, value_name = "JSON")]
    transcript_json: Option<String>,

    /// Reference sentence the speaker was asked to read
    #[arg(long, value_name = "TEXT", conflicts_with = "reference_file")]
    reference: Option<String>,

    /// Path to a file containing the reference sentence
    #[arg(long, value_name = "PATH")]
    reference_file: Option<PathBuf>,

    /// Optional JSON file overriding thresholds and the sibilant table
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also print the detailed JSON report
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Validate CLI arguments
    fn validate(&self) -> Result<()> {
        if self.transcript_file.is_none() && self.transcript_json.is_none() {
            bail!("Provide a transcription via TRANSCRIPT path or --transcript-json");
        }

        if let Some(path) = &self.transcript_file {
            if !path.exists() {
                bail!("Transcript file does not exist: {:?}", path);
            }
            if !path.is_file() {
                bail!("Transcript path is not a file: {:?}", path);
            }
        }

        if self.reference.is_none() && self.reference_file.is_none() {
            bail!("Provide the reference sentence via --reference or --reference-file");
        }

        Ok(())
    }

    fn transcription(&self) -> Result<TranscriptionResult> {
        load_transcription_from_sources(
            self.transcript_file.as_deref(),
            self.transcript_json.as_deref(),
        )
    }

    fn reference_text(&self) -> Result<String> {
        let text = match (&self.reference, &self.reference_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read reference file {:?}", path))?,
            (None, None) => bail!("No reference source provided"), // Unreachable after validation
        };
        if text.trim().is_empty() {
            bail!("Reference text must not be empty");
        }
        Ok(text.trim().to_string())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    args.validate()
        .context("Failed to validate command-line arguments")?;

    let reference_text = args.reference_text()?;
    let transcription = args
        .transcription()
        .context("Failed to load transcription")?;
    let config = ScoringConfig::from_override(args.config.as_deref())
        .context("Failed to load scoring configuration")?;

    let scorer = PronunciationScorer::new(config);
    let evaluation = scorer
        .evaluate(&reference_text, &transcription)
        .context("Evaluation failed")?;

    println!("{}", report::render_summary(&reference_text, &evaluation));
    if args.json {
        println!("{}", report::detailed_json(&evaluation)?);
    }

    Ok(())
}

fn load_transcription_from_sources(
    path: Option<&Path>,
    json: Option<&str>,
) -> Result<TranscriptionResult> {
    if let Some(p) = path {
        let data = fs::read_to_string(p)
            .with_context(|| format!("Failed to read transcript file {:?}", p))?;
        return parse_transcription(&data);
    }

    if let Some(raw) = json {
        return parse_transcription(raw);
    }

    bail!("No transcript source provided"); // Should not happen due to validation
}

fn parse_transcription(raw: &str) -> Result<TranscriptionResult> {
    let transcription: TranscriptionResult =
        serde_json::from_str(raw).context("Failed to parse transcription JSON")?;
    Ok(transcription)
}
