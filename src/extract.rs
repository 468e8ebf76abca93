//! Document text extraction.

use crate::container::{DocxPackage, DOCUMENT_BODY};
use crate::error::{Error, Result};
use crate::markup;
use serde::Serialize;
use std::fmt;
use std::io::{Read, Seek};
use std::path::Path;

/// Sentinel returned in place of text when the input path does not exist.
pub const FILE_NOT_FOUND: &str = "File not found";

/// Default qualified name of paragraph elements in the document body.
pub const DEFAULT_PARAGRAPH_TAG: &str = "w:p";

/// Outcome of extracting text from one document package.
///
/// Extraction never fails the caller: failures come back as
/// [`Extraction::Diagnostic`] carrying a short description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "content", rename_all = "lowercase")]
pub enum Extraction {
    /// Flattened document text
    Text(String),
    /// Description of why no text could be extracted
    Diagnostic(String),
}

impl Extraction {
    /// The text or diagnostic, whichever this is.
    pub fn as_str(&self) -> &str {
        match self {
            Extraction::Text(s) | Extraction::Diagnostic(s) => s,
        }
    }

    /// Returns true if extraction failed.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Extraction::Diagnostic(_))
    }
}

impl From<Result<String>> for Extraction {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => Extraction::Text(text),
            Err(e) => Extraction::Diagnostic(e.to_string()),
        }
    }
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How opening tags are recognized as paragraph markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagMatch {
    /// Any tag whose name starts with the paragraph tag (`<w:pPr>` included)
    #[default]
    Prefix,
    /// Only tags named exactly like the paragraph tag
    Exact,
}

/// Extraction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Archive entry holding the document body
    pub entry: String,

    /// Qualified tag name whose opening tags become newlines
    pub paragraph_tag: String,

    /// How `paragraph_tag` is matched against tag names
    pub paragraph_match: TagMatch,

    /// Decode XML entities (`&amp;` and friends) in the extracted text
    pub decode_entities: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            entry: DOCUMENT_BODY.to_string(),
            paragraph_tag: DEFAULT_PARAGRAPH_TAG.to_string(),
            paragraph_match: TagMatch::default(),
            decode_entities: false,
        }
    }
}

impl ExtractOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the archive entry to read.
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    /// Set the paragraph tag name.
    pub fn with_paragraph_tag(mut self, tag: impl Into<String>) -> Self {
        self.paragraph_tag = tag.into();
        self
    }

    /// Set how the paragraph tag is matched.
    pub fn with_paragraph_match(mut self, mode: TagMatch) -> Self {
        self.paragraph_match = mode;
        self
    }

    /// Enable or disable entity decoding.
    pub fn with_decode_entities(mut self, enabled: bool) -> Self {
        self.decode_entities = enabled;
        self
    }
}

/// Extract text from the document package at `path` with default options.
///
/// # Example
///
/// ```no_run
/// use docxtext::extract_text;
///
/// let text = extract_text("report.docx");
/// println!("{}", text);
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> Extraction {
    extract_text_with_options(path, &ExtractOptions::default())
}

/// Extract text from the document package at `path`.
///
/// A missing file yields [`FILE_NOT_FOUND`]; any other failure yields the
/// error description.
pub fn extract_text_with_options(path: impl AsRef<Path>, options: &ExtractOptions) -> Extraction {
    let path = path.as_ref();
    log::debug!("extracting {}", path.display());

    let extraction = Extraction::from(try_extract_text(path, options));
    if let Extraction::Diagnostic(ref message) = extraction {
        log::warn!("{}: {}", path.display(), message);
    }
    extraction
}

/// Extract text from the document package at `path`, propagating errors.
pub fn try_extract_text(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let package = DocxPackage::open(path)?;
    extract_from_package(package, options)
}

/// Extract text from an in-memory document package.
pub fn extract_text_from_bytes(data: &[u8], options: &ExtractOptions) -> Result<String> {
    let package = DocxPackage::from_bytes(data.to_vec())?;
    extract_from_package(package, options)
}

fn extract_from_package<R: Read + Seek>(
    mut package: DocxPackage<R>,
    options: &ExtractOptions,
) -> Result<String> {
    let xml = package.read_xml(&options.entry)?;
    Ok(markup::flatten(&xml, options))
}
