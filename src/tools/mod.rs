//! The tools module provides several helper functions for dnashrink.
//!
//! The tools are:
//! - alphabet: The closed nucleotide alphabet, the BWT sentinel, and input filtering.
//! - cli: Command line interface for dnashrink.
//! - freq_count: Frequency list feeding the code tree builder.
//!
pub mod alphabet;
pub mod cli;
pub mod freq_count;
