use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::types::SibilantType;

/// Scoring configuration, immutable once built and passed into the scorer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub thresholds: ReadinessThresholds,
    pub sibilants: Vec<SibilantRule>,
}

/// Minimum scores (and maximum lisp severity) for production readiness.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadinessThresholds {
    pub global_score: f64,
    pub levenshtein: f64,
    pub jaccard: f64,
    pub jaro: f64,
    pub lisp_severity: f64,
}

/// One catalogued sibilant pattern with its severity weight.
#[derive(Debug, Clone, Deserialize)]
pub struct SibilantRule {
    pub pattern: String,
    pub weight: f64,
    #[serde(alias = "type")]
    pub kind: SibilantType,
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            global_score: 85.0,
            levenshtein: 80.0,
            jaccard: 75.0,
            jaro: 80.0,
            lisp_severity: 3.0,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            thresholds: ReadinessThresholds::default(),
            sibilants: default_sibilants(),
        }
    }
}

fn default_sibilants() -> Vec<SibilantRule> {
    [
        ("s", 1.0, SibilantType::VoicelessAlveolar),
        ("z", 1.1, SibilantType::VoicedAlveolar),
        ("ch", 1.2, SibilantType::VoicelessPostalveolar),
        ("j", 1.3, SibilantType::VoicedPostalveolar),
    ]
    .into_iter()
    .map(|(pattern, weight, kind)| SibilantRule {
        pattern: pattern.to_string(),
        weight,
        kind,
    })
    .collect()
}

impl ScoringConfig {
    pub fn from_override(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(custom) => Self::from_file(custom),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read scoring config at {:?}", path))?;
        let config: Self = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse scoring config at {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.sibilants.is_empty(), "sibilant table must not be empty");
        for rule in &self.sibilants {
            ensure!(
                !rule.pattern.is_empty(),
                "sibilant pattern must not be empty"
            );
            ensure!(
                rule.pattern == rule.pattern.to_lowercase(),
                "sibilant pattern '{}' must be lower-case",
                rule.pattern
            );
            ensure!(
                rule.weight > 0.0,
                "sibilant weight for '{}' must be positive",
                rule.pattern
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{ScoringConfig, SibilantType};

    #[test]
    fn defaults_match_production_thresholds() {
        let config = ScoringConfig::default();
        assert_eq!(config.thresholds.global_score, 85.0);
        assert_eq!(config.thresholds.levenshtein, 80.0);
        assert_eq!(config.thresholds.jaccard, 75.0);
        assert_eq!(config.thresholds.jaro, 80.0);
        assert_eq!(config.thresholds.lisp_severity, 3.0);

        let patterns: Vec<&str> = config
            .sibilants
            .iter()
            .map(|rule| rule.pattern.as_str())
            .collect();
        assert_eq!(patterns, ["s", "z", "ch", "j"]);
        assert_eq!(config.sibilants[3].kind, SibilantType::VoicedPostalveolar);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"thresholds": {{"jaccard": 70.0}}}}"#).unwrap();
        let config = ScoringConfig::from_file(file.path()).unwrap();
        assert_eq!(config.thresholds.jaccard, 70.0);
        assert_eq!(config.thresholds.global_score, 85.0);
        assert_eq!(config.sibilants.len(), 4);
    }

    #[test]
    fn rejects_non_positive_weight() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sibilants": [{{"pattern": "s", "weight": 0.0, "kind": "voiceless_alveolar"}}]}}"#
        )
        .unwrap();
        assert!(ScoringConfig::from_file(file.path()).is_err());
    }
}
