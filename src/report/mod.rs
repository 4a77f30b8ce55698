//! Report rendering for evaluation results.
//!
//! Two presentations of the same [`EvaluationReport`]: a markdown summary
//! for humans and a grouped JSON document for downstream tooling.

use crate::types::EvaluationReport;

/// Render the human-readable markdown summary for one evaluation.
pub fn render_summary(reference_text: &str, report: &EvaluationReport) -> String {
    let mut out = String::new();
    out.push_str("# Pronunciation Analysis\n\n");
    out.push_str(&format!("**Reference**: {}\n", reference_text.trim()));
    out.push_str(&format!("**Transcribed**: {}\n", report.transcribed));
    out.push_str(&format!(
        "**Language**: {}\n",
        report.language.as_deref().unwrap_or("unknown")
    ));

    let assessment = &report.production_ready;
    out.push_str("\n## Production Readiness\n");
    out.push_str(&format!(
        "{} ({}/{} criteria met)\n",
        assessment.status, assessment.passed, assessment.total
    ));

    out.push_str("\n## Scores\n");
    out.push_str(&score_line(
        "Global",
        report.global_score,
        assessment.criteria.global_score,
    ));
    out.push_str(&score_line(
        "Levenshtein",
        report.levenshtein_score,
        assessment.criteria.levenshtein,
    ));
    out.push_str(&score_line(
        "Jaccard",
        report.jaccard_score,
        assessment.criteria.jaccard,
    ));
    out.push_str(&score_line(
        "Jaro-Winkler",
        report.jaro_score,
        assessment.criteria.jaro,
    ));

    out.push_str("\n## Word Analysis\n");
    out.push_str(&format!("**Missing**: {}\n", join_or_none(&report.missing_words)));
    out.push_str(&format!("**Added**: {}\n", join_or_none(&report.added_words)));
    out.push_str(&format!(
        "**Low confidence**: {}\n",
        join_or_none(&report.low_confidence_words)
    ));

    if report.lisp_candidates.is_empty() && report.missing_sibilants.is_empty() {
        out.push_str("\n## Sibilant Analysis\n");
        out.push_str("No pronunciation issues detected in sibilant words.\n");
    } else {
        out.push_str(&format!(
            "\n## Sibilant Analysis (severity {:.1}/5.0)\n",
            report.lisp_severity
        ));
        for candidate in &report.lisp_candidates {
            out.push_str(&format!(
                "- **{}** ({}): severity {:.1}, confidence {:.2}\n",
                candidate.word, candidate.sibilant_type, candidate.severity, candidate.confidence
            ));
        }
        if !report.missing_sibilants.is_empty() {
            out.push_str(&format!(
                "\n**Missing sibilants**: {}\n",
                report.missing_sibilants.join(", ")
            ));
        }
    }

    if !report.words.is_empty() {
        out.push_str("\n## Word Details\n");
        out.push_str("| Word | Start | End | Confidence |\n");
        out.push_str("|------|-------|-----|------------|\n");
        for word in &report.words {
            out.push_str(&format!(
                "| {} | {:.2} | {:.2} | {:.2} |\n",
                word.text, word.start, word.end, word.confidence
            ));
        }
    }

    out
}

/// Serialize the grouped JSON document: scores, production assessment,
/// lisp analysis, and word details.
pub fn detailed_json(report: &EvaluationReport) -> serde_json::Result<String> {
    let document = serde_json::json!({
        "scores": {
            "global_score": report.global_score,
            "levenshtein": report.levenshtein_score,
            "jaccard": report.jaccard_score,
            "jaro": report.jaro_score,
        },
        "production_assessment": report.production_ready,
        "lisp_analysis": {
            "severity": report.lisp_severity,
            "candidates": report.lisp_candidates,
            "missing_sibilants": report.missing_sibilants,
        },
        "word_details": report.words,
    });
    serde_json::to_string_pretty(&document)
}

fn score_line(label: &str, score: f64, met: bool) -> String {
    format!("- **{}**: {:.1}/100 {}\n", label, score, mark(met))
}

fn mark(met: bool) -> &'static str {
    if met {
        "✓"
    } else {
        "✗"
    }
}

fn join_or_none(words: &[String]) -> String {
    if words.is_empty() {
        "None".to_string()
    } else {
        words.join(", ")
    }
}
