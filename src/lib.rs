//! # docxtext
//!
//! Best-effort plain text extraction from DOCX document packages.
//!
//! The document body (`word/document.xml`) is read out of the ZIP package,
//! paragraph tags are turned into newlines and every other tag is stripped.
//! No structure (lists, tables, styles, images) is preserved.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docxtext::{extract_text, Extraction};
//!
//! match extract_text("document.docx") {
//!     Extraction::Text(text) => println!("{}", text),
//!     Extraction::Diagnostic(message) => eprintln!("no text: {}", message),
//! }
//! ```
//!
//! Extraction never fails the caller. A missing file yields the
//! `File not found` diagnostic and any other failure yields its description.
//! Use [`try_extract_text`] to get a [`Result`] instead.
//!
//! ## Options
//!
//! ```no_run
//! use docxtext::{extract_text_with_options, ExtractOptions};
//!
//! let options = ExtractOptions::new()
//!     .with_entry("word/footnotes.xml")
//!     .with_decode_entities(true);
//!
//! let footnotes = extract_text_with_options("document.docx", &options);
//! ```

pub mod container;
pub mod driver;
pub mod error;
pub mod extract;
pub mod markup;

// Re-exports
pub use container::{DocxPackage, DOCUMENT_BODY};
pub use driver::{FileReport, DEFAULT_FILES};
pub use error::{Error, Result};
pub use extract::{
    extract_text, extract_text_from_bytes, extract_text_with_options, try_extract_text,
    ExtractOptions, Extraction, TagMatch, DEFAULT_PARAGRAPH_TAG, FILE_NOT_FOUND,
};
