//! PDF transfer utility.
//!
//! Finds the user's desktop (including a Windows desktop mounted under WSL),
//! lists the PDFs below it and copies them into the local working directory
//! so they can be analyzed.

use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::AppError;

/// Windows desktop locations as seen from WSL, relative to the filesystem root.
/// Earlier patterns win.
pub const DESKTOP_CANDIDATES: &[&str] = &[
    "mnt/c/Users/*/Desktop",
    "mnt/c/Users/*/Desktop/Library",
    "mnt/c/Users/*/Desktop/library",
    "mnt/c/Users/*/OneDrive/Desktop",
    "mnt/c/Users/*/OneDrive/Desktop/Library",
    "mnt/c/Users/*/OneDrive/Desktop/library",
    "mnt/c/Users/*/OneDrive - */Desktop",
    "mnt/c/Users/*/OneDrive - */Desktop/Library",
    "mnt/c/Users/*/OneDrive - */Desktop/library",
];

/// A PDF found on the desktop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfEntry {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

impl PdfEntry {
    /// Size in mebibytes, for display
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Outcome of copying several PDFs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl CopySummary {
    pub fn total(&self) -> usize {
        self.copied.len() + self.failed.len()
    }
}

/// Matcher for a single path segment containing `*` wildcards
fn segment_matcher(segment: &str) -> Result<GlobMatcher, AppError> {
    Ok(Glob::new(segment)?.compile_matcher())
}

/// Existing directories under `root` matching a `/`-separated wildcard pattern.
pub fn expand_pattern(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, AppError> {
    let mut current = vec![root.to_path_buf()];

    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        let mut next = Vec::new();
        if segment.contains('*') {
            let matcher = segment_matcher(segment)?;
            for dir in &current {
                let Ok(entries) = fs::read_dir(dir) else {
                    continue;
                };
                let mut matched: Vec<PathBuf> = entries
                    .filter_map(|e| e.ok())
                    .filter(|e| matcher.is_match(e.file_name()))
                    .map(|e| e.path())
                    .filter(|p| p.is_dir())
                    .collect();
                matched.sort();
                next.extend(matched);
            }
        } else {
            next.extend(
                current
                    .iter()
                    .map(|dir| dir.join(segment))
                    .filter(|p| p.is_dir()),
            );
        }
        if next.is_empty() {
            return Ok(next);
        }
        current = next;
    }

    Ok(current)
}

/// First WSL desktop location found below `root`
pub fn find_wsl_desktop(root: &Path) -> Result<Option<PathBuf>, AppError> {
    for pattern in DESKTOP_CANDIDATES {
        if let Some(found) = expand_pattern(root, pattern)?.into_iter().next() {
            debug!("Desktop candidate {} matched {:?}", pattern, found);
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// Resolve the desktop folder: explicit override, then WSL, then the native desktop.
pub fn locate_desktop(override_path: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(path) = override_path {
        return if path.is_dir() {
            Ok(path.to_path_buf())
        } else {
            Err(AppError::NotFound(format!(
                "Desktop path {} does not exist",
                path.display()
            )))
        };
    }

    if let Some(found) = find_wsl_desktop(Path::new("/"))? {
        return Ok(found);
    }

    dirs::desktop_dir()
        .filter(|dir| dir.is_dir())
        .ok_or_else(|| AppError::NotFound("Desktop folder not found".to_string()))
}

/// All PDFs below `desktop`, sorted by path
pub fn list_pdfs(desktop: &Path) -> Result<Vec<PdfEntry>, AppError> {
    if !desktop.is_dir() {
        return Err(AppError::NotFound(format!(
            "{} is not a directory",
            desktop.display()
        )));
    }

    let mut pdfs: Vec<PdfEntry> = WalkDir::new(desktop)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .map(|e| PdfEntry {
            name: e.file_name().to_string_lossy().into_owned(),
            size_bytes: e.metadata().map(|m| m.len()).unwrap_or(0),
            path: e.into_path(),
        })
        .collect();

    pdfs.sort_by(|a, b| a.path.cmp(&b.path));
    info!("Found {} PDF(s) under {:?}", pdfs.len(), desktop);
    Ok(pdfs)
}

/// First PDF whose file name contains `query`, case-insensitively
pub fn find_pdf<'a>(pdfs: &'a [PdfEntry], query: &str) -> Option<&'a PdfEntry> {
    let query = query.to_lowercase();
    pdfs.iter()
        .find(|pdf| pdf.name.to_lowercase().contains(&query))
}

/// Copy one PDF into `destination_dir`, creating it if needed
pub fn copy_pdf(source: &Path, destination_dir: &Path) -> Result<PathBuf, AppError> {
    if !destination_dir.exists() {
        info!("Creating PDF directory: {:?}", destination_dir);
        fs::create_dir_all(destination_dir)?;
    }

    let file_name = source.file_name().ok_or_else(|| {
        AppError::Validation(format!("{} has no file name", source.display()))
    })?;
    let destination = destination_dir.join(file_name);

    fs::copy(source, &destination)?;
    info!("Copied {:?} -> {:?}", source, destination);
    Ok(destination)
}

/// Copy every PDF, continuing past individual failures
pub fn copy_all(pdfs: &[PdfEntry], destination_dir: &Path) -> CopySummary {
    let mut summary = CopySummary::default();
    for pdf in pdfs {
        match copy_pdf(&pdf.path, destination_dir) {
            Ok(destination) => summary.copied.push(destination),
            Err(e) => {
                warn!("Error copying {:?}: {}", pdf.path, e);
                summary.failed.push(pdf.path.clone());
            }
        }
    }
    summary
}
