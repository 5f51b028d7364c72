use std::path::PathBuf;

use log::{info, trace};

use super::sequence_file::{output_path, write_plain, OutputKind};
use crate::bwt_algorithms::bwt_decode::bwt_decode;
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::bwt_algorithms::trace::Trace;
use crate::error::{Result, ShrinkError};
use crate::tools::cli::{DnaOpts, Mode};

/// Drain a trace, printing each step to stdout when asked, and return its result.
pub fn replay(trace: Trace, print: bool) -> String {
    let total = trace.total();
    let result = trace.result().to_string();
    for (i, step) in trace.enumerate() {
        trace!("Step {}/{}", i + 1, total);
        if print {
            println!("---- Step {}/{} ----\n{}\n", i + 1, total, step);
        }
    }
    result
}

/// Run the forward or inverse BWT on a plain sequence and write the outcome.
pub fn transform(opts: &DnaOpts, sequence: &str, mode: Mode) -> Result<PathBuf> {
    let trace = match mode {
        Mode::Bwt => bwt_encode(sequence)?,
        Mode::Unbwt => bwt_decode(sequence)?,
        other => return Err(ShrinkError::ModeMismatch(other.to_string())),
    };
    if trace.is_noop() {
        info!("Nothing to do, the output is the input.");
    }
    let result = replay(trace, opts.steps);

    let path = output_path(&opts.output, &opts.file, OutputKind::plain(&result))?;
    write_plain(&path, &result)?;
    Ok(path)
}
