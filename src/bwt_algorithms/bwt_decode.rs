use log::{info, trace, warn};

use super::trace::{Step, Trace};
use crate::error::{Result, ShrinkError};
use crate::tools::alphabet::{first_foreign, is_transformed, SENTINEL};

/// Revert a Burrows-Wheeler transform, with every intermediate step recorded.
///
/// Starts from n empty rows. Each of the n rounds prepends the transformed column (row i gets
/// symbol i) and sorts the rows, recording the table before and after the sort. The row ending
/// in the sentinel is the original sequence; the sentinel is stripped off.
///
/// Input without a sentinel is taken as not transformed and comes back unchanged.
pub fn bwt_decode(transformed: &str) -> Result<Trace> {
    if let Some(c) = first_foreign(transformed) {
        return Err(ShrinkError::UnknownSymbol(c));
    }
    if !is_transformed(transformed) {
        warn!("The sequence is not transformed, leaving it unchanged.");
        return Ok(Trace::unchanged(transformed));
    }

    let column = transformed.as_bytes();
    let n = column.len();
    info!("Reverting the transform of {} symbols.", n);

    let mut steps = Vec::with_capacity(2 * n);
    let mut rows = vec![String::with_capacity(n); n];
    for _ in 0..n {
        rows.iter_mut()
            .zip(column)
            .for_each(|(row, &sym)| row.insert(0, sym as char));
        steps.push(Step::Prepended(rows.clone()));
        rows.sort_unstable();
        steps.push(Step::Sorted(rows.clone()));
    }

    let original = rows
        .iter()
        .find(|row| row.as_bytes().last() == Some(&SENTINEL))
        .map(|row| row[..row.len() - 1].to_string())
        .ok_or(ShrinkError::MalformedTransform)?;
    trace!("Inverse BWT of {} is {}", transformed, original);

    Ok(Trace::new(steps, original))
}
