//! `csv2owl` — Converts class and property tables into an OWL ontology document.
//!
//! **Inputs:**
//! - `<CLASSES>` — header row, then one class per row
//! - `<PROPERTIES>` — header row, then one object property per row
//! - `--prefixes <PATH>` — optional `marker,prefix,base IRI` rows (no header)
//!
//! **Usage:**
//! ```
//! csv2owl classes.csv properties.csv [--prefixes prefixes.csv]
//!         [--delimiter ';'] [--format json-ld|turtle|ntriples|xml] [--out <path>]
//! ```
//!
//! The document is written to stdout unless `--out` is given; log output
//! goes to stderr and is controlled by `RUST_LOG` or `-v`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use csv2owl::serializer::Format;
use tracing_subscriber::EnvFilter;

/// Convert spreadsheet class and property definitions into an ontology.
#[derive(Parser)]
#[command(
    name = "csv2owl",
    about = "Generate an OWL vocabulary from classes and properties tables"
)]
struct Args {
    /// Classes table (first column: class identifier).
    classes: PathBuf,

    /// Properties table (first column: property identifier).
    properties: PathBuf,

    /// Prefix table: `marker,prefix,base IRI` per row; a marker containing
    /// "default" selects the namespace for unqualified names.
    #[arg(long)]
    prefixes: Option<PathBuf>,

    /// Field delimiter for every table (sniffed per table when omitted).
    #[arg(long)]
    delimiter: Option<char>,

    /// Output format: json-ld, turtle, ntriples, or xml.
    #[arg(long, default_value = "json-ld")]
    format: Format,

    /// Output file (default: stdout). A path without an extension gets the
    /// format's conventional one (`.jsonld`, `.ttl`, `.nt`, `.rdf`).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log every mapped row.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let delimiter = args.delimiter.map(delimiter_byte).transpose()?;
    let prefixes = args.prefixes.as_deref().map(open).transpose()?;

    let conversion = csv2owl::convert(
        open(&args.classes)?,
        open(&args.properties)?,
        prefixes,
        delimiter,
    )
    .context("Failed to convert tables")?;

    let document = args
        .format
        .serialize(&conversion.graph, &conversion.namespaces)
        .with_context(|| format!("Failed to serialize ontology as {}", args.format))?;

    match &args.out {
        Some(path) => {
            let path = output_path(path, args.format);
            fs::write(&path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), format = %args.format, "written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .context("Failed to write to stdout")?;
            if !document.ends_with('\n') {
                stdout.write_all(b"\n").context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "csv2owl=debug" } else { "csv2owl=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn output_path(path: &Path, format: Format) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

fn delimiter_byte(c: char) -> Result<u8> {
    match u8::try_from(c) {
        Ok(byte) if byte.is_ascii() => Ok(byte),
        _ => bail!("Delimiter must be a single ASCII character, got {c:?}"),
    }
}
