use std::collections::HashSet;

const LEVENSHTEIN_WEIGHT: f64 = 0.5;
const JACCARD_WEIGHT: f64 = 0.3;
const JARO_WEIGHT: f64 = 0.2;

/// Component similarity scores on a 0-100 scale, one decimal of precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScores {
    pub levenshtein: f64,
    pub jaccard: f64,
    pub jaro: f64,
    pub global: f64,
}

/// Score a (reference, transcribed) pair. Both strings must already be
/// lower-cased and trimmed by the caller.
///
/// The global score is the fixed-weight combination of the three rounded
/// component scores; the weights are not configurable.
pub fn score_pair(reference: &str, transcribed: &str) -> SimilarityScores {
    let levenshtein = round1(strsim::normalized_levenshtein(reference, transcribed) * 100.0);
    let jaccard = round1(token_jaccard(reference, transcribed) * 100.0);
    let jaro = round1(strsim::jaro_winkler(reference, transcribed) * 100.0);
    let global = round1(
        levenshtein * LEVENSHTEIN_WEIGHT + jaccard * JACCARD_WEIGHT + jaro * JARO_WEIGHT,
    );
    SimilarityScores {
        levenshtein,
        jaccard,
        jaro,
        global,
    }
}

/// Intersection over union of whitespace-split token sets. Duplicates
/// collapse and word order is irrelevant.
fn token_jaccard(reference: &str, transcribed: &str) -> f64 {
    let left: HashSet<&str> = reference.split_whitespace().collect();
    let right: HashSet<&str> = transcribed.split_whitespace().collect();
    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = left.intersection(&right).count();
    intersection as f64 / union as f64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
