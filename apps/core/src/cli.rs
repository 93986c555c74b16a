//! CLI command definitions and handlers

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::DocumentAnalyzer;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::report::{self, RenderOptions, ReportFormat};
use crate::text_extract;
use crate::transfer;

/// BookBot - quick statistics for books and PDFs
#[derive(Parser, Debug)]
#[command(name = "bookbot")]
#[command(
    version,
    about = "Word counts, character frequencies, key concepts, reading time and executive insights for a document",
    arg_required_else_help = true,
    after_help = "\
Examples:
  bookbot analyze books/frankenstein.txt       Text report
  bookbot analyze book.pdf --format json       JSON output for scripting
  bookbot pdf list                             List PDFs on the desktop
  bookbot pdf copy 'learning python'           Copy a PDF into ./pdfs
  bookbot pdf analyze docker                   Copy and analyze a PDF"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: Option<String>,

    /// Override desktop discovery
    #[arg(long, global = true)]
    pub desktop_path: Option<PathBuf>,

    /// Local working directory for copied PDFs
    #[arg(long, global = true)]
    pub pdf_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Report output switches shared by the analyzing commands
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Include non-alphabetic characters in the character counts
    #[arg(long)]
    pub all_chars: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a text, Markdown, DOCX or PDF file
    Analyze {
        /// Path to the document
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Find and copy PDFs from the desktop
    Pdf {
        #[command(subcommand)]
        action: PdfCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PdfCommand {
    /// List PDFs available on the desktop
    List,

    /// Copy the first PDF whose name contains NAME
    Copy {
        name: String,
    },

    /// Copy every PDF from the desktop
    CopyAll,

    /// Copy the first PDF whose name contains NAME and analyze it
    Analyze {
        name: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Dispatch a parsed command line
pub fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    match cli.command {
        Commands::Analyze { path, output } => analyze_file(&path, &output),
        Commands::Pdf { action } => run_pdf(action, config),
    }
}

fn run_pdf(action: PdfCommand, config: &AppConfig) -> Result<()> {
    let desktop = transfer::locate_desktop(config.desktop_path().as_deref())?;
    let pdfs = transfer::list_pdfs(&desktop)?;
    let pdf_dir = config.pdf_dir();

    match action {
        PdfCommand::List => {
            if pdfs.is_empty() {
                println!("No PDF files found on Desktop");
                return Ok(());
            }
            println!("Found {} PDF(s):", pdfs.len());
            for (i, pdf) in pdfs.iter().enumerate() {
                println!("  {}. {} ({:.1} MB)", i + 1, pdf.name, pdf.size_mb());
            }
            Ok(())
        }
        PdfCommand::Copy { name } => {
            let copied = copy_matching(&pdfs, &name, &pdf_dir)?;
            println!("Copied: {}", copied.display());
            println!("PDF ready for analysis: bookbot analyze {}", copied.display());
            Ok(())
        }
        PdfCommand::CopyAll => {
            if pdfs.is_empty() {
                return Err(AppError::NotFound("No PDF files found to copy".to_string()).into());
            }
            let summary = transfer::copy_all(&pdfs, &pdf_dir);
            println!(
                "Successfully copied {}/{} PDFs",
                summary.copied.len(),
                summary.total()
            );
            println!("PDFs are now in the '{}' directory", pdf_dir.display());
            Ok(())
        }
        PdfCommand::Analyze { name, output } => {
            let copied = copy_matching(&pdfs, &name, &pdf_dir)?;
            analyze_file(&copied, &output)
        }
    }
}

fn copy_matching(pdfs: &[transfer::PdfEntry], name: &str, pdf_dir: &Path) -> Result<PathBuf> {
    let pdf = transfer::find_pdf(pdfs, name).ok_or_else(|| {
        AppError::NotFound(format!(
            "PDF '{}' not found on Desktop (use `bookbot pdf list` to see available PDFs)",
            name
        ))
    })?;
    Ok(transfer::copy_pdf(&pdf.path, pdf_dir)?)
}

fn analyze_file(path: &Path, output: &OutputArgs) -> Result<()> {
    let text = text_extract::extract_text_from_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let report = DocumentAnalyzer::new().report(&path.display().to_string(), &text);
    let rendered = report::render(
        &report,
        output.format,
        RenderOptions {
            all_chars: output.all_chars,
        },
    )?;

    match &output.output {
        Some(file) => {
            fs::write(file, rendered)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            info!("Report written to {:?}", file);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["bookbot", "analyze", "book.txt", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Analyze { path, output } => {
                assert_eq!(path, PathBuf::from("book.txt"));
                assert_eq!(output.format, ReportFormat::Json);
                assert!(!output.all_chars);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_pdf_subcommands() {
        let cli = Cli::try_parse_from(["bookbot", "pdf", "copy", "learning python"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Pdf { action: PdfCommand::Copy { ref name } } if name == "learning python"
        ));

        let cli = Cli::try_parse_from(["bookbot", "--pdf-dir", "out", "pdf", "copy-all"]).unwrap();
        assert_eq!(cli.pdf_dir, Some(PathBuf::from("out")));
        assert!(matches!(cli.command, Commands::Pdf { action: PdfCommand::CopyAll }));
    }

    #[test]
    fn test_missing_command_is_error() {
        assert!(Cli::try_parse_from(["bookbot"]).is_err());
        assert!(Cli::try_parse_from(["bookbot", "analyze"]).is_err());
    }
}
