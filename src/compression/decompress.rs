use std::path::PathBuf;

use log::info;

use super::sequence_file::{output_path, write_plain, OutputKind};
use super::transform::replay;
use crate::bitstream::bitpacker::PackedSequence;
use crate::bitstream::bitreader::{decode_bits, unpack};
use crate::bwt_algorithms::bwt_decode::bwt_decode;
use crate::bwt_algorithms::trace::Trace;
use crate::error::{Result, ShrinkError};
use crate::huffman_coding::code_table::DecodeTable;
use crate::tools::cli::{DnaOpts, Mode};

/// Output of the Huffman decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decompressed {
    pub sequence: String,
    /// Bit string rebuilt from the packed units
    pub binary: String,
}

/// Unpack the code units and decode them with the table.
pub fn decompress_sequence(packed: &PackedSequence, table: &DecodeTable) -> Result<Decompressed> {
    let binary = unpack(packed);
    let symbols = decode_bits(&binary, table)?;
    // Table symbols are all ASCII alphabet members
    let sequence = symbols.iter().map(|&b| b as char).collect::<String>();
    info!(
        "Decompressed {} units into {} symbols.",
        packed.units().len(),
        sequence.len()
    );
    Ok(Decompressed { sequence, binary })
}

/// Decompress, then revert the BWT. The trace is a no-op when the sequence has no sentinel.
pub fn decompress_then_unbwt(
    packed: &PackedSequence,
    table: &DecodeTable,
) -> Result<(Decompressed, Trace)> {
    let decompressed = decompress_sequence(packed, table)?;
    let trace = bwt_decode(&decompressed.sequence)?;
    Ok((decompressed, trace))
}

/// Decompress a packed file (reverting the BWT for UnzipUnbwt) and write the plain output.
pub fn decompress(
    opts: &DnaOpts,
    packed: &PackedSequence,
    table: &DecodeTable,
    mode: Mode,
) -> Result<PathBuf> {
    let (decompressed, sequence) = match mode {
        Mode::Unzip => {
            let d = decompress_sequence(packed, table)?;
            let sequence = d.sequence.clone();
            (d, sequence)
        }
        Mode::UnzipUnbwt => {
            let (d, trace) = decompress_then_unbwt(packed, table)?;
            (d, replay(trace, opts.steps))
        }
        other => return Err(ShrinkError::ModeMismatch(other.to_string())),
    };
    if opts.steps {
        println!("---- Binary ----\n{}\n", decompressed.binary);
    }

    let path = output_path(&opts.output, &opts.file, OutputKind::plain(&sequence))?;
    write_plain(&path, &sequence)?;
    Ok(path)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::{bwt_then_compress, compress_sequence};

    #[test]
    fn round_trip_test() {
        for seq in ["AC", "AATC", "ACTTGATC", "GATTACA$", "NNNNNNNNNA", "ATGCN$ATGCN$CCCCAAAT"] {
            let c = compress_sequence(seq).unwrap();
            let d = decompress_sequence(&c.packed, &c.table).unwrap();
            assert_eq!(d.sequence, seq);
            assert_eq!(d.binary, c.binary);
        }
    }

    #[test]
    fn chained_round_trip_test() {
        let (_, c) = bwt_then_compress("GATTACAGATTACA").unwrap();
        let (d, trace) = decompress_then_unbwt(&c.packed, &c.table).unwrap();
        assert_eq!(d.sequence.len(), 15);
        assert_eq!(trace.result(), "GATTACAGATTACA");
    }

    #[test]
    fn untransformed_chain_test() {
        let c = compress_sequence("GATTACA").unwrap();
        let (_, trace) = decompress_then_unbwt(&c.packed, &c.table).unwrap();
        assert!(trace.is_noop());
        assert_eq!(trace.result(), "GATTACA");
    }

    #[test]
    fn mismatched_table_test() {
        // Packs "11111110" with A=1, C=0
        let c = compress_sequence("AAAAAAAC").unwrap();
        let other = DecodeTable::from_entries(vec![("00".into(), b'A'), ("01".into(), b'C')])
            .unwrap();
        assert!(matches!(
            decompress_sequence(&c.packed, &other),
            Err(ShrinkError::MalformedCode { offset: 0 })
        ));
    }
}
