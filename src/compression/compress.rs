use std::path::PathBuf;

use log::{debug, info};

use super::sequence_file::{output_path, write_compressed, OutputKind};
use super::transform::replay;
use crate::bitstream::bitpacker::{pack, PackedSequence};
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::bwt_algorithms::trace::Trace;
use crate::error::{Result, ShrinkError};
use crate::huffman_coding::code_table::DecodeTable;
use crate::huffman_coding::huffman::build_tree;
use crate::tools::alphabet::first_foreign;
use crate::tools::cli::{DnaOpts, Mode};
use crate::tools::freq_count::freqs;

/// Output of the Huffman stage
#[derive(Debug, Clone)]
pub struct Compressed {
    /// Code units plus the width of the final unit
    pub packed: PackedSequence,
    /// Table needed to decode `packed`
    pub table: DecodeTable,
    /// Concatenated codes before packing
    pub binary: String,
}

/// Huffman code a sequence. Frequency list, tree and table are built from scratch every call.
pub fn compress_sequence(sequence: &str) -> Result<Compressed> {
    if let Some(c) = first_foreign(sequence) {
        return Err(ShrinkError::UnknownSymbol(c));
    }
    let data = sequence.as_bytes();

    let list = freqs(data)?;
    debug!(
        "Frequencies: {:?}",
        list.iter()
            .map(|e| (e.symbol as char, e.count))
            .collect::<Vec<_>>()
    );
    let tree = build_tree(&list)?;
    let codes = tree.table();

    let binary = codes.encode(data)?;
    let packed = pack(&binary)?;
    info!(
        "Compressed {} symbols into {} bits ({} units).",
        data.len(),
        binary.len(),
        packed.units().len()
    );

    Ok(Compressed {
        packed,
        table: codes.decode_table().clone(),
        binary,
    })
}

/// Forward BWT, then Huffman code the sentinel-bearing result.
pub fn bwt_then_compress(sequence: &str) -> Result<(Trace, Compressed)> {
    let trace = bwt_encode(sequence)?;
    let compressed = compress_sequence(trace.result())?;
    Ok((trace, compressed))
}

/// Compress a plain sequence (transforming it first for BwtZip) and write the output file.
pub fn compress(opts: &DnaOpts, sequence: &str, mode: Mode) -> Result<PathBuf> {
    let (coded, compressed) = match mode {
        Mode::Zip => (sequence.to_string(), compress_sequence(sequence)?),
        Mode::BwtZip => {
            let (trace, compressed) = bwt_then_compress(sequence)?;
            (replay(trace, opts.steps), compressed)
        }
        other => return Err(ShrinkError::ModeMismatch(other.to_string())),
    };
    if opts.steps {
        println!("---- Binary ----\n{}\n", compressed.binary);
    }

    let path = output_path(&opts.output, &opts.file, OutputKind::compressed(&coded))?;
    write_compressed(&path, &compressed.packed, &compressed.table)?;
    Ok(path)
}
