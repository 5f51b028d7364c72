//! The huffman module turns a frequency list into a binary code tree and derives the bit codes
//! of every symbol from it.
//!
//! The tree is built by a sequential fold over the ascending frequency list rather than a
//! priority queue. For the six symbol alphabet the codes stay short, and the fold keeps the
//! code table identical to the one stored in files written by earlier versions.
//!
pub mod code_table;
pub mod huffman;
