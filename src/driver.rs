//! Labeled-block driver over a list of document packages.

use crate::extract::{extract_text_with_options, ExtractOptions, Extraction};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Files processed when no explicit list is given.
pub const DEFAULT_FILES: [&str; 3] = [
    "1. Case Study -Context.docx",
    "2. Case Study - Complement.docx",
    "3. Case Study - Some needs.docx",
];

/// Extraction outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Path as it was given
    pub path: String,
    /// Text or diagnostic
    pub result: Extraction,
}

/// Extract every file and write one labeled block per file to `out`.
///
/// Each block is a `--- <name> ---` header, the extracted text or
/// diagnostic, and a blank line. Per-file failures only show up as
/// diagnostic text; the returned error is reserved for failures of `out`.
///
/// # Example
///
/// ```no_run
/// use docxtext::driver::{run, DEFAULT_FILES};
/// use docxtext::ExtractOptions;
///
/// let stdout = std::io::stdout();
/// run(&DEFAULT_FILES, &ExtractOptions::default(), &mut stdout.lock())?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn run<P: AsRef<Path>, W: Write>(
    files: &[P],
    options: &ExtractOptions,
    out: &mut W,
) -> io::Result<()> {
    for file in files {
        let file = file.as_ref();
        let extraction = extract_text_with_options(file, options);
        write_block(out, &file.display().to_string(), &extraction)?;
    }
    out.flush()
}

/// Write a single labeled block.
pub fn write_block<W: Write>(out: &mut W, name: &str, extraction: &Extraction) -> io::Result<()> {
    writeln!(out, "--- {} ---", name)?;
    writeln!(out, "{}", extraction)?;
    writeln!(out)
}

/// Extract every file and collect the outcomes.
pub fn collect<P: AsRef<Path>>(files: &[P], options: &ExtractOptions) -> Vec<FileReport> {
    files
        .iter()
        .map(|file| {
            let file = file.as_ref();
            FileReport {
                path: file.display().to_string(),
                result: extract_text_with_options(file, options),
            }
        })
        .collect()
}

/// Write reports as a pretty-printed JSON array.
pub fn write_json<W: Write>(reports: &[FileReport], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports).map_err(io::Error::from)?;
    writeln!(out)?;
    out.flush()
}
