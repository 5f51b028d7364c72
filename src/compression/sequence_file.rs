//! Reading and writing sequence files.
//!
//! A plain file holds the symbols, possibly wrapped over several lines. A compressed file has
//! two lines: the packed code units as chars U+0000..=U+00FF, then the decode table written as
//! `code:symbol,` pairs followed by `<last packed char>:<final unit width>,`.
//!
//! Packed chars may be anything, newline, comma and colon included. The table is therefore
//! parsed from the end: the width entry is peeled off first, and the packed line ends at the
//! last newline in front of the code entries, which never contain one.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::bitstream::bitpacker::PackedSequence;
use crate::error::{Result, ShrinkError};
use crate::huffman_coding::code_table::DecodeTable;
use crate::tools::alphabet::{is_symbol, is_transformed, is_uncompressed, sanitize};

/// Content of a sequence file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceFile {
    Plain(String),
    Compressed {
        packed: PackedSequence,
        table: DecodeTable,
    },
}

impl SequenceFile {
    pub fn is_plain(&self) -> bool {
        matches!(self, SequenceFile::Plain(_))
    }
}

/// Output flavours, named after what the file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Original,
    Bwt,
    Huffman,
    BwtHuffman,
}

impl OutputKind {
    /// Kind of a plain sequence: transformed or not
    pub fn plain(sequence: &str) -> Self {
        if is_transformed(sequence) {
            OutputKind::Bwt
        } else {
            OutputKind::Original
        }
    }

    /// Kind of a compressed sequence, from the sequence that went into the coder
    pub fn compressed(sequence: &str) -> Self {
        if is_transformed(sequence) {
            OutputKind::BwtHuffman
        } else {
            OutputKind::Huffman
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            OutputKind::Original => "original",
            OutputKind::Bwt => "bwt",
            OutputKind::Huffman => "huffman",
            OutputKind::BwtHuffman => "bwt_huffman",
        }
    }
}

/// Parse the text of a sequence file.
pub fn parse(content: &str) -> Result<SequenceFile> {
    let cleaned = sanitize(content);
    if is_uncompressed(&cleaned) {
        return Ok(SequenceFile::Plain(cleaned));
    }
    let (packed, table) = parse_compressed(content)?;
    Ok(SequenceFile::Compressed { packed, table })
}

fn bad(msg: &str) -> ShrinkError {
    ShrinkError::InvalidTable(msg.to_string())
}

/// Split a compressed file into its packed units and decode table.
fn parse_compressed(content: &str) -> Result<(PackedSequence, DecodeTable)> {
    let body = content
        .trim_end_matches(|c: char| c == '\n' || c == '\r')
        .strip_suffix(',')
        .ok_or_else(|| bad("missing trailing comma"))?;

    // Width entry: <last packed char>:<width>
    let mut tail = body.char_indices().rev();
    let width = match tail.next() {
        Some((_, c)) => c
            .to_digit(10)
            .filter(|w| (1..=8).contains(w))
            .ok_or_else(|| bad("final unit width is not a digit 1-8"))? as u8,
        None => return Err(bad("empty table")),
    };
    if !matches!(tail.next(), Some((_, ':'))) {
        return Err(bad("width entry has no ':'"));
    }
    let (last_idx, last_char) = tail.next().ok_or_else(|| bad("width entry has no key"))?;

    let head = body[..last_idx]
        .strip_suffix(',')
        .ok_or_else(|| bad("no code entries before the width entry"))?;
    let (packed_text, entries) = head
        .rsplit_once('\n')
        .ok_or_else(|| bad("no line break between packed data and table"))?;

    let mut codes = Vec::new();
    for entry in entries.split(',') {
        let (code, symbol) = entry
            .split_once(':')
            .ok_or_else(|| ShrinkError::InvalidTable(format!("entry {:?} has no ':'", entry)))?;
        let symbol = match symbol.as_bytes() {
            [b] if is_symbol(*b) => *b,
            _ => {
                return Err(ShrinkError::InvalidTable(format!(
                    "{:?} is not a sequence symbol",
                    symbol
                )))
            }
        };
        codes.push((code.to_string(), symbol));
    }
    let table = DecodeTable::from_entries(codes)?;

    let packed = PackedSequence::from_text(packed_text, width)?;
    if packed.units().last().map(|&u| char::from(u)) != Some(last_char) {
        return Err(ShrinkError::InvalidTable(format!(
            "width entry key {:?} is not the last packed char",
            last_char
        )));
    }
    debug!(
        "Parsed {} packed units and {} codes, final width {}",
        packed.units().len(),
        table.len(),
        width
    );
    Ok((packed, table))
}

/// Text of a compressed file
pub fn render_compressed(packed: &PackedSequence, table: &DecodeTable) -> String {
    let mut out = packed.as_text();
    out.push('\n');
    for (code, symbol) in table.entries() {
        out.push_str(&format!("{}:{},", code, *symbol as char));
    }
    if let Some(&last) = packed.units().last() {
        out.push_str(&format!("{}:{},", char::from(last), packed.last_width()));
    }
    out
}

/// Read and parse a sequence file.
pub fn read_sequence_file(path: &Path) -> Result<SequenceFile> {
    let content = fs::read_to_string(path)?;
    info!("Read {} bytes from {}", content.len(), path.display());
    parse(&content)
}

/// Output path `<dir>/<stem>_<kind>.txt`. The directory is created if needed.
pub fn output_path(dir: &Path, input: &Path, kind: OutputKind) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sequence".to_string());
    Ok(dir.join(format!("{}_{}.txt", stem, kind.suffix())))
}

pub fn write_plain(path: &Path, sequence: &str) -> Result<()> {
    fs::write(path, sequence)?;
    info!("Wrote {} symbols to {}", sequence.len(), path.display());
    Ok(())
}

pub fn write_compressed(path: &Path, packed: &PackedSequence, table: &DecodeTable) -> Result<()> {
    fs::write(path, render_compressed(packed, table))?;
    info!(
        "Wrote {} packed units to {}",
        packed.units().len(),
        path.display()
    );
    Ok(())
}
