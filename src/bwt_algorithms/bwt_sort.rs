use log::{info, trace, warn};

use super::trace::{Step, Trace};
use crate::error::{Result, ShrinkError};
use crate::tools::alphabet::{first_foreign, is_transformed, SENTINEL};

/// Burrows-Wheeler transform of a raw sequence, with every intermediate step recorded.
///
/// The sentinel is appended, the n rotations are generated one at a time (rotation i is the
/// input rotated left by i, one snapshot each), the rows are sorted ($ sorts first), and the
/// last column of the sorted rows is the result.
///
/// Input that already holds the sentinel is taken as transformed and comes back unchanged.
pub fn bwt_encode(sequence: &str) -> Result<Trace> {
    if let Some(c) = first_foreign(sequence) {
        return Err(ShrinkError::UnknownSymbol(c));
    }
    if is_transformed(sequence) {
        warn!("The sequence is already transformed, leaving it unchanged.");
        return Ok(Trace::unchanged(sequence));
    }

    let mut block = String::with_capacity(sequence.len() + 1);
    block.push_str(sequence);
    block.push(SENTINEL as char);
    let n = block.len();
    info!("Transforming {} symbols.", n);

    // n growing snapshots, then the sorted matrix
    let mut steps = Vec::with_capacity(n + 1);
    let mut rows: Vec<String> = Vec::with_capacity(n);
    for i in 0..n {
        // The alphabet is ASCII, so every byte index is a char boundary
        let mut rotation = String::with_capacity(n);
        rotation.push_str(&block[i..]);
        rotation.push_str(&block[..i]);
        rows.push(rotation);
        steps.push(Step::Rotation(rows.clone()));
    }

    rows.sort_unstable();
    let result = rows
        .iter()
        .filter_map(|row| row.as_bytes().last())
        .map(|&b| b as char)
        .collect::<String>();
    steps.push(Step::Sorted(rows));
    trace!("BWT of {} is {}", block, result);

    Ok(Trace::new(steps, result))
}
