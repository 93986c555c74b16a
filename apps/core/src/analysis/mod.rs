//! # Analysis Module
//!
//! Fast, deterministic statistics for a single document.
//!
//! ## Components
//! - `stats`: word count and case-folded character frequencies
//! - `technical`: weighted technical vocabulary classifier
//! - `concepts`: curated concept extraction
//! - `reading_time`: reading time range estimation
//! - `insights`: executive summary decision tree
//! - `document`: output data structures
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod concepts;
pub mod document;
pub mod insights;
pub mod reading_time;
pub mod stats;
pub mod technical;

pub use analyzer::DocumentAnalyzer;
pub use document::{DocumentAnalysis, DocumentReport};
