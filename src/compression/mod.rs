//! The compression module chains the stages into the workflows a caller runs.
//!
//! Compression:
//! - Frequency list of the sequence, ascending, ties in order of first occurrence.
//! - Code tree built by folding that list, and the code table walked from it.
//! - Codes concatenated into one bit string and packed into 8 bit units.
//!
//! Decompression unpacks the units (the last one at its recorded width) and decodes the bit
//! string greedily against the table stored with the file.
//!
//! The Burrows-Wheeler transform can run before compression or after decompression. Each
//! workflow rebuilds the frequency list, tree and tables from the sequence it is given.
//!

pub mod compress;
pub mod decompress;
pub mod sequence_file;
pub mod transform;
