//! ZIP container abstraction for DOCX document packages.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Archive entry holding the main document body of a word-processing package.
pub const DOCUMENT_BODY: &str = "word/document.xml";

/// A document package opened as a ZIP archive.
///
/// The package owns its reader, so an archive opened from a path holds the
/// file handle until the package is dropped.
pub struct DocxPackage<R> {
    archive: zip::ZipArchive<R>,
}

impl DocxPackage<BufReader<File>> {
    /// Open a document package from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docxtext::container::{DocxPackage, DOCUMENT_BODY};
    ///
    /// let mut package = DocxPackage::open("document.docx")?;
    /// let xml = package.read_xml(DOCUMENT_BODY)?;
    /// # Ok::<(), docxtext::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}

impl DocxPackage<Cursor<Vec<u8>>> {
    /// Create a document package from an in-memory byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }
}

impl<R: Read + Seek> DocxPackage<R> {
    /// Create a document package from any seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Read an entry from the archive and decode it as XML text.
    pub fn read_xml(&mut self, name: &str) -> Result<String> {
        let bytes = self.read_binary(name)?;
        decode_xml_bytes(&bytes)
    }

    /// Read the raw bytes of an entry.
    pub fn read_binary(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut entry = self.archive.by_name(name).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => Error::MissingComponent(name.to_string()),
            other => Error::from(other),
        })?;

        // Declared sizes come from the archive headers and are not trusted.
        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;
        Ok(data)
    }
}

impl<R: Read + Seek> std::fmt::Debug for DocxPackage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocxPackage")
            .field("entries", &self.archive.len())
            .finish()
    }
}

/// Decode XML entry bytes to a string.
///
/// Entries must be UTF-8. A byte order mark is kept as U+FEFF and anything
/// that is not valid UTF-8, UTF-16 included, is an encoding error.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| Error::Encoding(e.to_string()))
}
