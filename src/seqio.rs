//! Sequence file IO: `>`-header input parsed with `needletail`, output
//! written with `bio::io::fasta`.
//!
//! ### Design
//! - **Input** is read whole (gunzipped with `flate2` when it starts with the
//!   gzip magic) and parsed with `needletail`, so `Scaffolds.fasta.gz` works
//!   the same as the plain file. Headers with no sequence lines become empty
//!   records wherever they occur.
//! - **Output** is one `>name` line and one unwrapped sequence line per entry.
//! - **Sinks**: the pipeline never opens output files itself; it hands each
//!   finished collection to a [`VariantSink`].
//!
//! ### Errors
//! Opening, parsing and writing failures surface as [`CleanError`].
//!
//! ### Example
//! ```no_run
//! use scaftrim::seqio;
//! let store = seqio::load_records("Scaffolds.fasta").unwrap();
//! println!("read {} records", store.len());
//! ```
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use needletail::errors::ParseErrorKind;
use needletail::parse_fastx_reader;

use crate::config::OutputPaths;
use crate::error::{CleanError, Result};
use crate::record::{header_id, RecordStore};
use crate::variant::{OutputCollection, Variant};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

fn parse_error(path: &Path, e: needletail::errors::ParseError) -> CleanError {
    CleanError::Sequence { path: path.to_path_buf(), message: e.to_string() }
}

/// Split off header lines that close the input without a body.
///
/// needletail rejects a final record with no sequence line, so those headers
/// are peeled off here (last one first) and stored as empty sequences.
fn split_trailing_headers(mut data: &[u8]) -> (&[u8], Vec<String>) {
    let mut headers = Vec::new();
    loop {
        let end = data.iter().rposition(|b| !b.is_ascii_whitespace()).map_or(0, |i| i + 1);
        let trimmed = &data[..end];
        let line_start = trimmed.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        match trimmed.get(line_start) {
            Some(b'>') => {
                headers.push(header_id(&trimmed[line_start + 1..]));
                data = &trimmed[..line_start];
            }
            _ => return (trimmed, headers),
        }
    }
}

fn normalize(seq: &[u8]) -> Vec<u8> {
    seq.iter().filter(|b| !b.is_ascii_whitespace()).map(u8::to_ascii_uppercase).collect()
}

fn insert_record(store: &mut RecordStore, id: String, seq: Vec<u8>) {
    if store.contains(&id) {
        tracing::debug!(id = %id, "duplicate identifier; later record replaces earlier");
    }
    store.insert_owned(id, seq);
}

/// Parse uncompressed `>`-header text into a [`RecordStore`].
///
/// Records without a body, anywhere in the file, become empty sequences.
pub fn parse_records(data: &[u8], path: &Path) -> Result<RecordStore> {
    let mut store = RecordStore::new();
    let start = data.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(data.len());
    let data = &data[start..];
    let (body, trailing) = if data.first() == Some(&b'>') {
        split_trailing_headers(data)
    } else {
        (data, Vec::new())
    };

    if !body.is_empty() {
        let mut fastx = match parse_fastx_reader(body) {
            Ok(r) => r,
            Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => return Ok(store),
            Err(e) => return Err(parse_error(path, e)),
        };
        while let Some(record) = fastx.next() {
            let rec = record.map_err(|e| parse_error(path, e))?;
            insert_record(&mut store, header_id(rec.id()), normalize(&rec.seq()));
        }
    }
    for id in trailing.into_iter().rev() {
        insert_record(&mut store, id, Vec::new());
    }
    Ok(store)
}

/// Read all of `reader`, gunzip it if needed, and parse it with [`parse_records`].
///
/// `path` is used only to label errors. An empty input is an empty store.
pub fn read_records<R: io::Read>(mut reader: R, path: &Path) -> Result<RecordStore> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(|e| CleanError::io(path, e))?;
    if raw.starts_with(&GZIP_MAGIC) {
        let mut plain = Vec::new();
        MultiGzDecoder::new(raw.as_slice())
            .read_to_end(&mut plain)
            .map_err(|e| CleanError::io(path, e))?;
        return parse_records(&plain, path);
    }
    parse_records(&raw, path)
}

/// Load the sequence file at `path` (plain or gzip-compressed).
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<RecordStore> {
    let p = path.as_ref();
    let file = File::open(p).map_err(|e| CleanError::io(p, e))?;
    read_records(file, p)
}

/// Write `collection` in `>`-header format to `w`.
pub fn write_fasta<W: io::Write>(w: W, collection: &OutputCollection) -> io::Result<()> {
    let mut writer = fasta::Writer::new(w);
    for (name, seq) in collection {
        writer.write(name, None, seq)?;
    }
    writer.flush()
}

/// Destination for finished variant collections.
pub trait VariantSink {
    fn write_variant(&mut self, variant: Variant, collection: &OutputCollection) -> Result<()>;
}

/// Writes each variant to its own FASTA file.
#[derive(Clone, Debug)]
pub struct FastaFileSink {
    paths: OutputPaths,
}

impl FastaFileSink {
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }

    pub fn path_for(&self, variant: Variant) -> &Path {
        self.paths.get(variant)
    }
}

impl VariantSink for FastaFileSink {
    fn write_variant(&mut self, variant: Variant, collection: &OutputCollection) -> Result<()> {
        let path: PathBuf = self.path_for(variant).to_path_buf();
        let file = File::create(&path).map_err(|e| CleanError::io(&path, e))?;
        write_fasta(file, collection).map_err(|e| CleanError::io(&path, e))?;
        tracing::info!(
            variant = %variant,
            entries = collection.len(),
            path = %path.display(),
            "variant written"
        );
        Ok(())
    }
}

/// Keeps written collections in memory, in the order they arrived.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub written: Vec<(Variant, OutputCollection)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variant: Variant) -> Option<&OutputCollection> {
        self.written.iter().find(|(v, _)| *v == variant).map(|(_, c)| c)
    }
}

impl VariantSink for MemorySink {
    fn write_variant(&mut self, variant: Variant, collection: &OutputCollection) -> Result<()> {
        self.written.push((variant, collection.clone()));
        Ok(())
    }
}
