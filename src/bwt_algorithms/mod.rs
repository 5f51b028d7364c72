//! The bwt_algorithms module holds the Burrows-Wheeler transform and its inverse.
//!
//! Both directions materialise the full rotation matrix and sort it, which is quadratic in
//! memory and only meant for short sequences. Each call returns a Trace holding every
//! intermediate table so a caller can step through the transform after it has run.
//!
pub mod bwt_decode;
pub mod bwt_sort;
pub mod trace;
