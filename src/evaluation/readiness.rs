use super::similarity::SimilarityScores;
use crate::config::ReadinessThresholds;
use crate::types::{CriteriaMet, ProductionAssessment, ReadinessStatus};

const MINOR_ISSUES_RATIO: f64 = 0.8;

/// Reduce the similarity scores plus lisp severity to a pass/fail verdict
/// against the configured thresholds. Pure function, no state between calls.
pub fn assess(
    scores: &SimilarityScores,
    lisp_severity: f64,
    thresholds: &ReadinessThresholds,
) -> ProductionAssessment {
    let criteria = CriteriaMet {
        global_score: scores.global >= thresholds.global_score,
        levenshtein: scores.levenshtein >= thresholds.levenshtein,
        jaccard: scores.jaccard >= thresholds.jaccard,
        jaro: scores.jaro >= thresholds.jaro,
        lisp_acceptable: lisp_severity <= thresholds.lisp_severity,
    };
    let flags = [
        criteria.global_score,
        criteria.levenshtein,
        criteria.jaccard,
        criteria.jaro,
        criteria.lisp_acceptable,
    ];
    let passed = flags.iter().filter(|met| **met).count();
    let total = flags.len();
    let status = if passed == total {
        ReadinessStatus::Ready
    } else if passed as f64 >= total as f64 * MINOR_ISSUES_RATIO {
        ReadinessStatus::MinorIssues
    } else {
        ReadinessStatus::NotReady
    };
    ProductionAssessment {
        criteria,
        passed,
        total,
        status,
    }
}
