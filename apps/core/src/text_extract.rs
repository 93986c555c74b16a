//! Text extraction module for various file formats
//! Supports: TXT, MD, CSV, JSON, PDF, DOCX

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::AppError;

const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "csv", "json"];
const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Lowercased extension of a file name, empty if none
fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

/// Read a file from disk and extract its text
pub fn extract_text_from_file(path: &Path) -> Result<String, AppError> {
    let file_data = fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    extract_text_from_bytes(&file_data, &file_name)
}

/// Extract text content from binary file data based on file extension
pub fn extract_text_from_bytes(file_data: &[u8], file_name: &str) -> Result<String, AppError> {
    let extension = extension_of(file_name);

    info!("Extracting text from file: {} (type: {})", file_name, extension);

    match extension.as_str() {
        ext if TEXT_EXTENSIONS.contains(&ext) => decode_utf8(file_data),
        "pdf" => extract_pdf_text(file_data),
        "docx" => extract_docx_text(file_data),
        _ => extract_sniffed(file_data, file_name),
    }
}

/// Route content with an unknown extension by its magic bytes
fn extract_sniffed(file_data: &[u8], file_name: &str) -> Result<String, AppError> {
    match infer::get(file_data) {
        Some(kind) if kind.mime_type() == PDF_MIME => {
            debug!("{} looks like a PDF", file_name);
            extract_pdf_text(file_data)
        }
        Some(kind) if kind.mime_type() == DOCX_MIME => {
            debug!("{} looks like a DOCX document", file_name);
            extract_docx_text(file_data)
        }
        Some(kind) => Err(AppError::UnsupportedFormat(format!(
            "{} ({})",
            file_name,
            kind.mime_type()
        ))),
        None => decode_utf8(file_data),
    }
}

/// Decode plain text, rejecting invalid UTF-8 and binary content
fn decode_utf8(file_data: &[u8]) -> Result<String, AppError> {
    let content = String::from_utf8(file_data.to_vec())
        .map_err(|e| AppError::Extraction(format!("Invalid UTF-8 content: {}", e)))?;

    // Basic check for binary files (contains null bytes)
    if content.contains('\0') {
        return Err(AppError::Extraction(
            "Binary files are not supported".to_string(),
        ));
    }

    Ok(content)
}

/// Extract text from PDF file
pub(crate) fn extract_pdf_text(file_data: &[u8]) -> Result<String, AppError> {
    info!("Extracting text from PDF...");

    match pdf_extract::extract_text_from_mem(file_data) {
        Ok(text) => {
            let cleaned = clean_extracted_text(&text);
            info!("PDF extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Err(e) => {
            warn!("PDF extraction failed: {}", e);
            Err(AppError::Extraction(format!(
                "Failed to extract PDF text: {}",
                e
            )))
        }
    }
}

/// Concatenated run text of one DOCX paragraph
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| match pc {
            docx_rs::ParagraphChild::Run(run) => Some(
                run.children
                    .iter()
                    .filter_map(|rc| match rc {
                        docx_rs::RunChild::Text(t) => Some(t.text.as_str()),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}

/// Extract text from DOCX file
pub(crate) fn extract_docx_text(file_data: &[u8]) -> Result<String, AppError> {
    info!("Extracting text from DOCX...");

    match docx_rs::read_docx(file_data) {
        Ok(docx) => {
            let text = docx
                .document
                .children
                .iter()
                .filter_map(|child| match child {
                    docx_rs::DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                    _ => None,
                })
                .filter(|para_text| !para_text.trim().is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            let cleaned = clean_extracted_text(&text);
            info!("DOCX extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Err(e) => {
            warn!("DOCX extraction failed: {}", e);
            Err(AppError::Extraction(format!(
                "Failed to extract DOCX text: {}",
                e
            )))
        }
    }
}

/// Clean up extracted text
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
