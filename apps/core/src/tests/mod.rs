//! Test Module
//!
//! Test suite for the BookBot analyzer.
//!
//! ## Test Categories
//! - `analysis_tests`: word count, character frequency, classifier, concepts,
//!   reading time, executive summary
//! - `text_extract_tests`: text, PDF and DOCX extraction
//! - `transfer_tests`: desktop discovery, PDF listing and copying
//! - `config_tests`: environment configuration
//! - `integration_tests`: file to rendered report

pub mod integration_tests;
