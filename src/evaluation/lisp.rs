use crate::config::SibilantRule;
use crate::types::{LispCandidate, WordObservation};

const CONFIDENCE_FLOOR: f64 = 0.7;
const CONFIDENCE_SCALE: f64 = 5.0;
const INTERDENTAL_BONUS: f64 = 2.0;
const LATERAL_BONUS: f64 = 1.5;
const CANDIDATE_FLOOR: f64 = 0.5;
const SEVERITY_CAP: f64 = 5.0;
const INTERDENTAL_PATTERN: &str = "th";
const LATERAL_PATTERNS: [&str; 2] = ["sl", "tl"];

/// Outcome of the sibilant severity pass.
#[derive(Debug, Clone, Default)]
pub struct LispAnalysis {
    pub candidates: Vec<LispCandidate>,
    pub missing_sibilants: Vec<String>,
    /// Sum of recorded candidate severities, saturating at 5.0. A saturating
    /// sum, not an average: many qualifying words still yield at most 5.0.
    pub severity: f64,
}

/// Flag transcribed words likely mispronounced on sibilant sounds.
///
/// Substring matching on raw letters is a crude proxy for phonetic analysis
/// and is kept only as a heuristic severity signal. Every rule in the table
/// matches independently, so a single word can contribute several
/// candidates, one per matching sibilant.
pub fn analyze(
    words: &[WordObservation],
    reference_words: &[String],
    rules: &[SibilantRule],
) -> LispAnalysis {
    let mut candidates = Vec::new();
    let mut total = 0.0;

    for word in words {
        let lower = word.text.to_lowercase();
        for rule in rules {
            if !lower.contains(&rule.pattern) {
                continue;
            }
            let severity = rule_severity(&lower, word.confidence, rule.weight);
            if severity > CANDIDATE_FLOOR {
                let capped = severity.min(SEVERITY_CAP);
                candidates.push(LispCandidate {
                    word: word.text.clone(),
                    start: word.start,
                    end: word.end,
                    confidence: word.confidence,
                    severity: capped,
                    sibilant_type: rule.kind,
                });
                total += capped;
            }
        }
    }

    LispAnalysis {
        candidates,
        missing_sibilants: missing_sibilants(reference_words, words, rules),
        severity: total.min(SEVERITY_CAP),
    }
}

fn rule_severity(word: &str, confidence: f64, weight: f64) -> f64 {
    let mut severity = 0.0;
    // Low model confidence on a sibilant word suggests substitution.
    if confidence < CONFIDENCE_FLOOR {
        severity += (CONFIDENCE_FLOOR - confidence) * CONFIDENCE_SCALE * weight;
    }
    // Interdental lisp indicator.
    if word.contains(INTERDENTAL_PATTERN) {
        severity += INTERDENTAL_BONUS * weight;
    }
    // Lateral lisp indicator.
    if LATERAL_PATTERNS.iter().any(|pattern| word.contains(pattern)) {
        severity += LATERAL_BONUS * weight;
    }
    severity
}

/// Reference words carrying a sibilant that never literally appear among
/// the sibilant-bearing transcribed words (case-insensitive token match).
fn missing_sibilants(
    reference_words: &[String],
    words: &[WordObservation],
    rules: &[SibilantRule],
) -> Vec<String> {
    let transcribed: Vec<String> = words
        .iter()
        .map(|word| word.text.to_lowercase())
        .filter(|word| has_sibilant(word, rules))
        .collect();
    reference_words
        .iter()
        .filter(|word| has_sibilant(word, rules))
        .filter(|word| !transcribed.contains(*word))
        .cloned()
        .collect()
}

fn has_sibilant(word: &str, rules: &[SibilantRule]) -> bool {
    rules.iter().any(|rule| word.contains(&rule.pattern))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::analyze;
    use crate::config::ScoringConfig;
    use crate::types::{SibilantType, WordObservation};

    fn word(text: &str, confidence: f64) -> WordObservation {
        WordObservation {
            text: text.to_string(),
            start: 0.0,
            end: 0.4,
            confidence,
        }
    }

    fn rules() -> Vec<crate::config::SibilantRule> {
        ScoringConfig::default().sibilants
    }

    #[test]
    fn below_candidate_floor_is_not_recorded() {
        // (0.7 - 0.65) * 5.0 * 1.2 = 0.3, under the 0.5 recording floor.
        let analysis = analyze(&[word("chat", 0.65)], &[], &rules());
        assert!(analysis.candidates.is_empty());
        assert_eq!(analysis.severity, 0.0);
    }

    #[test]
    fn low_confidence_sibilant_is_recorded_with_weighted_severity() {
        // (0.7 - 0.5) * 5.0 * 1.2 = 1.2
        let analysis = analyze(&[word("chat", 0.5)], &[], &rules());
        assert_eq!(analysis.candidates.len(), 1);
        let candidate = &analysis.candidates[0];
        assert_relative_eq!(candidate.severity, 1.2, epsilon = 1e-9);
        assert_eq!(candidate.sibilant_type, SibilantType::VoicelessPostalveolar);
        assert_relative_eq!(analysis.severity, 1.2, epsilon = 1e-9);
    }

    #[test]
    fn each_matching_rule_contributes_independently() {
        // "jazz" matches both z (1.1) and j (1.3) at confidence 0.5:
        // z: 0.2 * 5.0 * 1.1 = 1.1, j: 0.2 * 5.0 * 1.3 = 1.3
        let analysis = analyze(&[word("jazz", 0.5)], &[], &rules());
        assert_eq!(analysis.candidates.len(), 2);
        assert_eq!(
            analysis.candidates[0].sibilant_type,
            SibilantType::VoicedAlveolar
        );
        assert_eq!(
            analysis.candidates[1].sibilant_type,
            SibilantType::VoicedPostalveolar
        );
        assert_relative_eq!(analysis.severity, 2.4, epsilon = 1e-9);
    }

    #[test]
    fn interdental_pattern_adds_weighted_bonus() {
        // "s" rule on a fully confident word: 2.0 * 1.0 from the "th" hit.
        let analysis = analyze(&[word("maths", 1.0)], &[], &rules());
        assert_eq!(analysis.candidates.len(), 1);
        assert_relative_eq!(analysis.candidates[0].severity, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn lateral_pattern_adds_weighted_bonus() {
        let analysis = analyze(&[word("slalom", 1.0)], &[], &rules());
        assert_eq!(analysis.candidates.len(), 1);
        assert_relative_eq!(analysis.candidates[0].severity, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn aggregate_severity_saturates_at_cap() {
        let words: Vec<WordObservation> = (0..10).map(|_| word("si", 0.2)).collect();
        let analysis = analyze(&words, &[], &rules());
        assert_eq!(analysis.candidates.len(), 10);
        assert_eq!(analysis.severity, 5.0);
    }

    #[test]
    fn reports_missing_sibilants_from_reference() {
        let reference: Vec<String> = ["chaise", "table", "jour"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let analysis = analyze(&[word("chaise", 0.9)], &reference, &rules());
        // "table" has no sibilant; "jour" does and never appears.
        assert_eq!(analysis.missing_sibilants, vec!["jour".to_string()]);
    }

    #[test]
    fn confident_sibilant_word_is_clean() {
        let analysis = analyze(&[word("chanson", 0.95)], &[], &rules());
        assert!(analysis.candidates.is_empty());
        assert_eq!(analysis.severity, 0.0);
    }
}
