//! Huffman coding and Burrows-Wheeler transform of nucleotide sequences.
//!
//! Sequences use the closed alphabet A, T, G, C, N plus the `$` sentinel the transform
//! appends. Two independent codecs are provided:
//! - A Huffman-style coder that folds the frequency list into a code tree, packs the codes
//!   into 8 bit units and records the width of the final, unpadded unit.
//! - A Burrows-Wheeler transform and its inverse that record every intermediate table, so
//!   the caller can step through them after the fact.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> dnashrink -z sequence.txt`
//!
//! This writes data/sequence_huffman.txt. `-b -z` transforms before compressing, `-d -u`
//! decompresses and reverts the transform.
//!
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{Result, ShrinkError};
