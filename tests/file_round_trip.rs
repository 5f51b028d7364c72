use std::fs;
use std::path::Path;

use clap::Parser;
use dnashrink::compression::compress::{compress, compress_sequence};
use dnashrink::compression::decompress::{decompress, decompress_sequence};
use dnashrink::compression::sequence_file::{
    output_path, read_sequence_file, write_compressed, OutputKind, SequenceFile,
};
use dnashrink::compression::transform::transform;
use dnashrink::tools::cli::{DnaOpts, Mode};
use dnashrink::ShrinkError;

fn opts(input: &Path, out: &Path, flags: &[&str]) -> DnaOpts {
    let mut args = vec!["dnashrink".to_string()];
    args.extend(flags.iter().map(|f| f.to_string()));
    args.push("-o".to_string());
    args.push(out.display().to_string());
    args.push(input.display().to_string());
    DnaOpts::parse_from(args)
}

fn plain(path: &Path) -> String {
    match read_sequence_file(path).unwrap() {
        SequenceFile::Plain(seq) => seq,
        other => panic!("expected a plain file, got {:?}", other),
    }
}

#[test]
fn compressed_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let seq = "ACTTGATCGGATCCANNATCGATCGTAGCTAGCTAGGGCTA";
    let c = compress_sequence(seq).unwrap();

    let path = output_path(dir.path(), Path::new("sample.txt"), OutputKind::Huffman).unwrap();
    write_compressed(&path, &c.packed, &c.table).unwrap();

    match read_sequence_file(&path).unwrap() {
        SequenceFile::Compressed { packed, table } => {
            assert_eq!(packed, c.packed);
            let d = decompress_sequence(&packed, &table).unwrap();
            assert_eq!(d.sequence, seq);
        }
        other => panic!("expected a compressed file, got {:?}", other),
    }
}

#[test]
fn wrapped_plain_file_is_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wrapped.txt");
    fs::write(&input, "ACGT ACGT\nNNAC\n").unwrap();
    assert_eq!(plain(&input), "ACGTACGTNNAC");
}

#[test]
fn bwt_compress_then_decompress_unbwt() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data");
    let input = dir.path().join("genome.txt");
    fs::write(&input, "GATTACAGATTACANNC").unwrap();

    let o = opts(&input, &out, &["-b", "-z"]);
    assert_eq!(o.op_mode(true), Mode::BwtZip);
    let packed_path = compress(&o, "GATTACAGATTACANNC", Mode::BwtZip).unwrap();
    assert_eq!(packed_path, out.join("genome_bwt_huffman.txt"));

    let o = opts(&packed_path, &out, &["-d", "-u"]);
    let (packed, table) = match read_sequence_file(&packed_path).unwrap() {
        SequenceFile::Compressed { packed, table } => (packed, table),
        other => panic!("expected a compressed file, got {:?}", other),
    };
    let restored = decompress(&o, &packed, &table, Mode::UnzipUnbwt).unwrap();
    assert_eq!(restored, out.join("genome_bwt_huffman_original.txt"));
    assert_eq!(plain(&restored), "GATTACAGATTACANNC");
}

#[test]
fn transform_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("seq.txt");
    fs::write(&input, "ACTTGATC").unwrap();

    let o = opts(&input, dir.path(), &["-b"]);
    let bwt_path = transform(&o, "ACTTGATC", Mode::Bwt).unwrap();
    assert_eq!(bwt_path, dir.path().join("seq_bwt.txt"));
    assert_eq!(plain(&bwt_path), "C$GTATATC");

    let o = opts(&bwt_path, dir.path(), &["-u"]);
    let back = transform(&o, "C$GTATATC", Mode::Unbwt).unwrap();
    assert_eq!(back, dir.path().join("seq_bwt_original.txt"));
    assert_eq!(plain(&back), "ACTTGATC");
}

#[test]
fn wrong_mode_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("seq.txt");
    let o = opts(&input, dir.path(), &[]);
    assert!(matches!(
        transform(&o, "ACGT", Mode::Zip),
        Err(ShrinkError::ModeMismatch(_))
    ));
}
