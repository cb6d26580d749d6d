//! # Content Type: Suffix-Driven Normalization Dispatch
//!
//! `ContentType` is a closed enum. Every `match` on it is exhaustive, so a new
//! variant forces the normalizer to decide how that type is canonicalized.

use std::path::Path;

/// Suffixes normalized as plain text.
pub const TEXT_EXTENSIONS: &[&str] = &[".txt", ".md", ".csv"];

/// Suffixes normalized as JSON.
pub const JSON_EXTENSIONS: &[&str] = &[".json"];

/// Binary suffixes hashed byte-for-byte.
pub const BINARY_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".xlsx", ".png", ".jpg", ".jpeg"];

/// How a document's bytes are canonicalized before hashing.
///
/// Each variant keeps the lowercase suffix (with its leading dot) it was
/// derived from, for diagnostics. `Unknown` carries an empty string when the
/// file has no suffix at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Text, Markdown, CSV.
    PlainText(String),
    /// JSON documents.
    StructuredJson(String),
    /// Known binary formats (PDF, Office, images).
    OpaqueBinary(String),
    /// Anything else.
    Unknown(String),
}

impl ContentType {
    /// Classify a file suffix such as `".JSON"` or `"md"`.
    ///
    /// Matching is ASCII case-insensitive; a missing leading dot is added.
    pub fn from_extension(ext: &str) -> Self {
        let lower = ext.to_ascii_lowercase();
        let ext = if lower.is_empty() || lower.starts_with('.') {
            lower
        } else {
            format!(".{lower}")
        };

        let ext_ref = ext.as_str();
        if TEXT_EXTENSIONS.contains(&ext_ref) {
            Self::PlainText(ext)
        } else if JSON_EXTENSIONS.contains(&ext_ref) {
            Self::StructuredJson(ext)
        } else if BINARY_EXTENSIONS.contains(&ext_ref) {
            Self::OpaqueBinary(ext)
        } else {
            Self::Unknown(ext)
        }
    }

    /// Classify a path by its final suffix.
    ///
    /// Dotfiles such as `.env` and paths without an extension are `Unknown`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => Self::Unknown(String::new()),
        }
    }

    /// The suffix this type was derived from.
    pub fn extension(&self) -> &str {
        match self {
            Self::PlainText(ext)
            | Self::StructuredJson(ext)
            | Self::OpaqueBinary(ext)
            | Self::Unknown(ext) => ext,
        }
    }

    /// Short identifier for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText(_) => "plain_text",
            Self::StructuredJson(_) => "structured_json",
            Self::OpaqueBinary(_) => "opaque_binary",
            Self::Unknown(_) => "unknown",
        }
    }

    /// True for the types that carry a canonicalization guarantee.
    pub fn is_normalizable(&self) -> bool {
        matches!(self, Self::PlainText(_) | Self::StructuredJson(_))
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
