//! PDF proposal ingestion
//!
//! Walks a proposals directory, extracts full text from each PDF via
//! pdf-extract, and derives a vendor-name hint from the filename. Documents
//! that fail to load are logged and skipped; the batch continues.

use crate::error::{ProcuraError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A proposal document loaded from disk, ready for extraction
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Source PDF path
    pub path: PathBuf,
    /// Vendor name derived from the filename, used as extraction fallback
    pub vendor_hint: String,
    /// Full extracted text, all pages concatenated
    pub content: String,
    /// Source file size in bytes
    pub file_size: u64,
}

/// Loader for vendor proposal PDFs
pub struct PdfLoader;

impl Default for PdfLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfLoader {
    /// Create a new PdfLoader
    pub fn new() -> Self {
        Self
    }

    /// Load all PDFs under `dir` matching the glob `pattern`.
    ///
    /// Unreadable or text-free PDFs are logged at WARN and skipped.
    pub fn load_directory(&self, dir: &Path, pattern: &str) -> Result<Vec<LoadedDocument>> {
        if !dir.exists() {
            return Err(ProcuraError::InvalidInput(format!(
                "Proposals directory does not exist: {}",
                dir.display()
            )));
        }

        let pdf_files = self.scan_directory(dir, pattern)?;
        tracing::info!("Found {} PDF files to process", pdf_files.len());

        let mut documents = Vec::new();
        for pdf_path in pdf_files {
            match self.load_file(&pdf_path) {
                Ok(doc) => {
                    tracing::info!(
                        "Loaded {}: {} characters",
                        doc.vendor_hint,
                        doc.content.len()
                    );
                    documents.push(doc);
                }
                Err(e) => {
                    tracing::warn!("Skipping PDF {}: {}", pdf_path.display(), e);
                }
            }
        }

        Ok(documents)
    }

    /// Load a single PDF file
    pub fn load_file(&self, path: &Path) -> Result<LoadedDocument> {
        let file_size = fs::metadata(path)?.len();
        let content = self.extract_text(path)?;
        let vendor_hint = vendor_hint_from_path(path);

        Ok(LoadedDocument {
            path: path.to_path_buf(),
            vendor_hint,
            content,
            file_size,
        })
    }

    /// Extract text from a PDF file
    fn extract_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| {
            ProcuraError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read PDF file {}: {}", path.display(), e),
            ))
        })?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ProcuraError::Pdf(format!(
                "Failed to extract text from {}: {}",
                path.display(),
                e
            ))
        })?;

        if text.trim().is_empty() {
            return Err(ProcuraError::Pdf(format!(
                "PDF file {} contains no extractable text (may be image-based)",
                path.display()
            )));
        }

        Ok(text)
    }

    /// Scan directory for PDF files matching pattern
    fn scan_directory(&self, base_path: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let glob_pattern = glob::Pattern::new(pattern)?;
        let mut pdf_files = Vec::new();

        for entry in WalkDir::new(base_path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                // The root itself may be dot-prefixed; only prune below it
                e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.')
            })
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if let Some(ext) = path.extension() {
                if ext.eq_ignore_ascii_case("pdf") {
                    if let Ok(relative) = path.strip_prefix(base_path) {
                        if glob_pattern.matches(&relative.to_string_lossy()) {
                            pdf_files.push(path.to_path_buf());
                        }
                    }
                }
            }
        }

        pdf_files.sort();
        Ok(pdf_files)
    }
}

/// Derive a vendor-name hint from a file path.
///
/// `acme_corp.pdf` becomes "Acme Corp": separators to spaces, each word
/// title-cased, matching how the cached records name failed extractions.
pub fn vendor_hint_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown Vendor");

    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
