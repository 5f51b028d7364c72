use std::fmt::{Display, Formatter};

/// One observable snapshot of a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Rotations generated so far, in generation order (forward)
    Rotation(Vec<String>),
    /// All rows after a lexicographic sort (forward and inverse)
    Sorted(Vec<String>),
    /// Rows after prepending the transformed column, before sorting (inverse)
    Prepended(Vec<String>),
    /// The outcome of the transform
    Result(String),
}

impl Step {
    pub fn is_result(&self) -> bool {
        matches!(self, Step::Result(_))
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Rotation(rows) | Step::Sorted(rows) | Step::Prepended(rows) => {
                write!(f, "{}", rows.join("\n"))
            }
            Step::Result(sequence) => write!(f, "{}", sequence),
        }
    }
}

/// The steps of one transform call. The transform runs once, up front; iterating only
/// replays the stored snapshots, and `result()` reads the outcome without re-running anything.
///
/// Iteration is forward only. Once exhausted the trace keeps returning None.
#[derive(Debug)]
pub struct Trace {
    steps: std::vec::IntoIter<Step>,
    result: String,
    total: usize,
}

impl Trace {
    /// Wrap the snapshots of a finished transform. The outcome is appended as the final step.
    pub(crate) fn new(mut steps: Vec<Step>, result: String) -> Self {
        steps.push(Step::Result(result.clone()));
        Self {
            total: steps.len(),
            steps: steps.into_iter(),
            result,
        }
    }

    /// Trace of a transform that had nothing to do: the input is the result.
    pub(crate) fn unchanged(input: &str) -> Self {
        Self::new(Vec::new(), input.to_string())
    }

    /// Final sequence of the transform
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn into_result(self) -> String {
        self.result
    }

    /// Number of steps produced by the transform, final step included
    pub fn total(&self) -> usize {
        self.total
    }

    /// True when the transform short-circuited and returned its input
    pub fn is_noop(&self) -> bool {
        self.total == 1
    }
}

impl Iterator for Trace {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        self.steps.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn replay_test() {
        let mut trace = Trace::new(
            vec![Step::Sorted(vec!["$A".into(), "A$".into()])],
            "A$".into(),
        );
        assert_eq!(trace.total(), 2);
        assert_eq!(trace.result(), "A$");
        assert_eq!(trace.next().unwrap().to_string(), "$A\nA$");
        assert_eq!(trace.next(), Some(Step::Result("A$".into())));
        assert_eq!(trace.next(), None);
        assert_eq!(trace.next(), None);
        // Still readable after exhaustion
        assert_eq!(trace.result(), "A$");
    }

    #[test]
    fn unchanged_test() {
        let trace = Trace::unchanged("AC$");
        assert!(trace.is_noop());
        assert_eq!(trace.collect::<Vec<_>>(), vec![Step::Result("AC$".into())]);
    }
}
