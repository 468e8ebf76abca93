//! docxtext CLI - plain text extraction from DOCX packages
//!
//! Prints one labeled block per document. Failures show up as diagnostic
//! text inside the block; the process always exits successfully.

use clap::Parser;
use docxtext::driver::{self, DEFAULT_FILES};
use docxtext::{ExtractOptions, TagMatch, DEFAULT_PARAGRAPH_TAG, DOCUMENT_BODY};
use std::io::{self, Write};
use std::path::PathBuf;

/// Extract visible text from DOCX document packages
#[derive(Parser)]
#[command(
    name = "docxtext",
    version,
    about = "Extract plain text from DOCX documents",
    long_about = "docxtext - best-effort plain text extraction from DOCX packages.\n\n\
                  Paragraphs become newlines and all other markup is stripped.\n\
                  Without FILES, the three case study documents in the current\n\
                  directory are read."
)]
struct Cli {
    /// Document packages to read (default: the case study documents)
    files: Vec<PathBuf>,

    /// Archive entry holding the document body
    #[arg(long, default_value = DOCUMENT_BODY)]
    entry: String,

    /// Tag name prefix whose opening tags become newlines
    #[arg(long, default_value = DEFAULT_PARAGRAPH_TAG)]
    paragraph_tag: String,

    /// Match the paragraph tag name exactly instead of as a prefix
    #[arg(long)]
    exact_paragraph_tag: bool,

    /// Decode XML entities such as &amp; in the output
    #[arg(long)]
    decode_entities: bool,

    /// Print a JSON report instead of labeled blocks
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> ExtractOptions {
        ExtractOptions::new()
            .with_entry(self.entry.as_str())
            .with_paragraph_tag(self.paragraph_tag.as_str())
            .with_paragraph_match(if self.exact_paragraph_tag {
                TagMatch::Exact
            } else {
                TagMatch::Prefix
            })
            .with_decode_entities(self.decode_entities)
    }

    fn files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            DEFAULT_FILES.iter().map(PathBuf::from).collect()
        } else {
            self.files.clone()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    // Per-file failures are already in the output; only the sink can fail here.
    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        log::error!("failed to write output: {}", e);
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> io::Result<()> {
    let files = cli.files();
    let options = cli.options();

    if cli.json {
        let reports = driver::collect(&files, &options);
        driver::write_json(&reports, out)
    } else {
        driver::run(&files, &options, out)
    }
}
