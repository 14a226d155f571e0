//! Document ingestion: turning an essay file into plain text.
//!
//! Only text-bearing formats are read here. PDF text layers and OCR of
//! raster images belong to external tooling, so those types yield an empty
//! string, which evaluation rejects as "no text detected".

use camino::Utf8Path;

use crate::error::{IngestError, IngestResult};
use crate::markdown;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Title used when a document has no non-empty line.
pub const UNTITLED: &str = "Untitled";

/// How a file's content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain UTF-8 text.
    PlainText,
    /// CommonMark, stripped to prose.
    Markdown,
    /// A format this crate cannot extract text from.
    Unsupported,
}

impl DocumentKind {
    /// Classify a path by extension (case-insensitive).
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            None | Some("txt" | "text") => Self::PlainText,
            Some("md" | "markdown") => Self::Markdown,
            Some(_) => Self::Unsupported,
        }
    }
}

/// Extract plain text from the file at `path`.
///
/// `max_bytes` bounds the file size, checked from metadata before reading.
/// Unsupported types return an empty string rather than an error.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn extract_text(path: &Utf8Path, max_bytes: Option<usize>) -> IngestResult<String> {
    let kind = DocumentKind::from_path(path);
    if kind == DocumentKind::Unsupported {
        tracing::warn!(
            path = %path,
            extension = path.extension().unwrap_or_default(),
            "unsupported document type, no text extracted"
        );
        return Ok(String::new());
    }

    let metadata = std::fs::metadata(path.as_std_path()).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            return Err(IngestError::TooLarge {
                path: path.to_path_buf(),
                size,
                max,
            });
        }
    }

    let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match kind {
        DocumentKind::Markdown => markdown::strip_to_prose(&raw),
        _ => raw,
    };
    tracing::debug!(bytes = text.len(), ?kind, "document extracted");
    Ok(text)
}

/// The first non-empty trimmed line, or [`UNTITLED`].
pub fn detect_title(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}
