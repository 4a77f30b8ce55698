//! Parleval - pronunciation evaluation against a reference sentence.
//!
//! The crate consumes the serialized output of an external speech-to-text
//! tool (full text plus word-level timing and confidence) and scores how
//! closely the rendition matches the reference: three string-similarity
//! metrics combined into a global score, a word-level membership diff,
//! a weighted sibilant ("lisp") severity heuristic, and a production
//! readiness gate over fixed thresholds.

pub mod config;
pub mod evaluation;
pub mod report;
pub mod types;
