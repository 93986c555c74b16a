//! BookBot - quick statistics and executive insights for books and PDFs
//!
//! The `bookbot` binary is a thin shell over these modules.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod text_extract;
pub mod transfer;

#[cfg(test)]
mod tests;
