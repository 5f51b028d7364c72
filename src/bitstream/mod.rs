//! The bitstream module packs code bits into 8 bit units and reads them back.
//!
//! The total bit count of a coded sequence is rarely a multiple of 8. The final unit is
//! therefore stored at its natural width instead of being padded, and that width travels
//! alongside the decode table so the reader knows how many bits to take from it.
//!
pub mod bitpacker;
pub mod bitreader;
