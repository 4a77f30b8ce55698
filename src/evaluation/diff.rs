use std::collections::HashSet;

use crate::types::WordObservation;

const LOW_CONFIDENCE_FLOOR: f64 = 0.6;

/// Word-set comparison between the reference sentence and the transcription.
#[derive(Debug, Clone, Default)]
pub struct WordDiff {
    pub missing_words: Vec<String>,
    pub added_words: Vec<String>,
    pub low_confidence_words: Vec<String>,
}

/// Membership diff between reference and transcribed word lists.
///
/// Deliberately a set probe, not an edit-distance alignment: the probed side
/// keeps its order and duplicates while the other side is treated as a set,
/// so repeated or reordered words mis-classify. That approximation is part
/// of the scoring contract; changing it changes outcomes.
pub fn diff_words(reference_words: &[String], words: &[WordObservation]) -> WordDiff {
    let transcribed: Vec<String> = words.iter().map(|word| word.text.to_lowercase()).collect();
    let transcribed_set: HashSet<&str> = transcribed.iter().map(String::as_str).collect();
    let reference_set: HashSet<&str> = reference_words.iter().map(String::as_str).collect();

    let missing_words = reference_words
        .iter()
        .filter(|word| !transcribed_set.contains(word.as_str()))
        .cloned()
        .collect();
    let added_words = transcribed
        .iter()
        .filter(|word| !reference_set.contains(word.as_str()))
        .cloned()
        .collect();
    let low_confidence_words = words
        .iter()
        .filter(|word| word.confidence < LOW_CONFIDENCE_FLOOR)
        .map(|word| word.text.clone())
        .collect();

    WordDiff {
        missing_words,
        added_words,
        low_confidence_words,
    }
}
