//! Pronunciation scoring against a reference sentence.
//!
//! The scorer consumes the flattened word list and full text of an external
//! transcription and produces an [`EvaluationReport`]: similarity scores,
//! word-level differences, sibilant severity, and a readiness verdict.
//! Each call is stateless; everything in the report is built fresh.

pub mod diff;
pub mod lisp;
pub mod readiness;
pub mod similarity;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ScoringConfig;
use crate::types::{EvaluationReport, TranscriptionResult, WordObservation};

/// Convenient alias for results returned by evaluation modules.
pub type Result<T> = std::result::Result<T, EvaluationError>;

/// Broad failure category carried by an [`EvaluationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was absent or empty; nothing was computed.
    MissingInput,
    /// A scoring routine received data it cannot score.
    Computation,
}

/// Lightweight error type for the evaluation pipeline.
#[derive(Debug, Clone)]
pub struct EvaluationError {
    kind: ErrorKind,
    message: Arc<str>,
}

impl EvaluationError {
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MissingInput,
            message: Arc::from(message.into()),
        }
    }

    pub fn computation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Computation,
            message: Arc::from(message.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for EvaluationError {}

/// Scores one transcribed rendition against its reference sentence.
#[derive(Debug, Clone, Default)]
pub struct PronunciationScorer {
    config: ScoringConfig,
}

impl PronunciationScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Evaluate a transcription against the reference sentence.
    ///
    /// The reference must be non-empty; an empty transcription is legal and
    /// simply scores zero across the similarity metrics.
    pub fn evaluate(
        &self,
        reference_text: &str,
        transcription: &TranscriptionResult,
    ) -> Result<EvaluationReport> {
        let reference = reference_text.trim().to_lowercase();
        if reference.is_empty() {
            return Err(EvaluationError::missing_input("reference text is empty"));
        }

        let transcribed = transcription.text.trim().to_lowercase();
        let words = transcription.words();
        validate_words(&words)?;
        let reference_words: Vec<String> = reference
            .split_whitespace()
            .map(str::to_string)
            .collect();
        debug!(
            reference_words = reference_words.len(),
            transcribed_words = words.len(),
            "inputs normalized"
        );

        let scores = similarity::score_pair(&reference, &transcribed);
        let word_diff = diff::diff_words(&reference_words, &words);
        let lisp = lisp::analyze(&words, &reference_words, &self.config.sibilants);
        let production_ready = readiness::assess(&scores, lisp.severity, &self.config.thresholds);
        info!(
            global = scores.global,
            lisp_severity = lisp.severity,
            status = %production_ready.status,
            "evaluation complete"
        );

        Ok(EvaluationReport {
            transcribed,
            language: transcription.language.clone(),
            global_score: scores.global,
            levenshtein_score: scores.levenshtein,
            jaccard_score: scores.jaccard,
            jaro_score: scores.jaro,
            missing_words: word_diff.missing_words,
            added_words: word_diff.added_words,
            low_confidence_words: word_diff.low_confidence_words,
            lisp_candidates: lisp.candidates,
            missing_sibilants: lisp.missing_sibilants,
            lisp_severity: lisp.severity,
            production_ready,
            words,
        })
    }
}

fn validate_words(words: &[WordObservation]) -> Result<()> {
    for word in words {
        if !word.start.is_finite() || !word.end.is_finite() || word.end < word.start {
            return Err(EvaluationError::computation(format!(
                "word '{}' has invalid timing {:.3}..{:.3}",
                word.text, word.start, word.end
            )));
        }
        if !word.confidence.is_finite() || !(0.0..=1.0).contains(&word.confidence) {
            return Err(EvaluationError::computation(format!(
                "word '{}' has confidence {} outside [0, 1]",
                word.text, word.confidence
            )));
        }
    }
    Ok(())
}
