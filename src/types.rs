//! Core types for the parleval evaluation pipeline

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One transcribed word with timing and model confidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordObservation {
    #[serde(alias = "word")]
    pub text: String,
    /// Word onset in seconds
    pub start: f64,
    /// Word offset in seconds
    pub end: f64,
    /// Model confidence in [0, 1]; tools that omit it mean "certain"
    #[serde(default = "full_confidence", alias = "probability")]
    pub confidence: f64,
}

fn full_confidence() -> f64 {
    1.0
}

/// Output of the external speech-to-text tool, parsed from its JSON document
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

/// A transcript segment grouping consecutive word observations
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub words: Vec<WordObservation>,
}

impl TranscriptionResult {
    /// Flatten segments into one ordered word list. Whisper-style tools
    /// attach leading whitespace to each token; it is trimmed off here so
    /// every downstream comparison sees clean words.
    pub fn words(&self) -> Vec<WordObservation> {
        self.segments
            .iter()
            .flat_map(|segment| segment.words.iter())
            .map(|word| WordObservation {
                text: word.text.trim().to_string(),
                start: word.start,
                end: word.end,
                confidence: word.confidence,
            })
            .collect()
    }
}

/// Structured evaluation of one transcribed rendition, immutable once built
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Normalized (lower-cased, trimmed) transcribed text
    pub transcribed: String,
    pub language: Option<String>,
    /// Weighted combination of the three similarity scores, 0-100
    pub global_score: f64,
    pub levenshtein_score: f64,
    pub jaccard_score: f64,
    pub jaro_score: f64,
    /// Reference words absent from the transcription, in reference order
    pub missing_words: Vec<String>,
    /// Transcribed words absent from the reference, in transcription order
    pub added_words: Vec<String>,
    pub low_confidence_words: Vec<String>,
    pub lisp_candidates: Vec<LispCandidate>,
    pub missing_sibilants: Vec<String>,
    /// Aggregate sibilant severity, saturating at 5.0
    pub lisp_severity: f64,
    pub production_ready: ProductionAssessment,
    /// Flattened word observations, kept for the word-detail table
    pub words: Vec<WordObservation>,
}

/// A transcribed word flagged as a likely sibilant mispronunciation
#[derive(Debug, Clone, Serialize)]
pub struct LispCandidate {
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
    /// Per-word severity in [0, 5]
    pub severity: f64,
    pub sibilant_type: SibilantType,
}

/// Phonetic class of a catalogued sibilant pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SibilantType {
    VoicelessAlveolar,
    VoicedAlveolar,
    VoicelessPostalveolar,
    VoicedPostalveolar,
}

impl Display for SibilantType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SibilantType::VoicelessAlveolar => "voiceless alveolar",
            SibilantType::VoicedAlveolar => "voiced alveolar",
            SibilantType::VoicelessPostalveolar => "voiceless postalveolar",
            SibilantType::VoicedPostalveolar => "voiced postalveolar",
        };
        write!(f, "{}", label)
    }
}

/// Pass/fail reduction of the quality criteria
#[derive(Debug, Clone, Serialize)]
pub struct ProductionAssessment {
    pub criteria: CriteriaMet,
    /// Count of satisfied criteria, at most `total`
    pub passed: usize,
    pub total: usize,
    pub status: ReadinessStatus,
}

/// Which of the five quality criteria were satisfied
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CriteriaMet {
    pub global_score: bool,
    pub levenshtein: bool,
    pub jaccard: bool,
    pub jaro: bool,
    pub lisp_acceptable: bool,
}

/// Overall readiness verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessStatus {
    Ready,
    MinorIssues,
    NotReady,
}

impl Display for ReadinessStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReadinessStatus::Ready => "PRODUCTION READY",
            ReadinessStatus::MinorIssues => "NEEDS MINOR IMPROVEMENTS",
            ReadinessStatus::NotReady => "NOT PRODUCTION READY",
        };
        write!(f, "{}", label)
    }
}
