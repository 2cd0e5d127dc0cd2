//! A fully drained stream: every element it produced, and how it ended.

use crate::error::{Error, Result};

/// The recorded run of a stream of `Result<T>`.
///
/// Elements produced before a failure are kept; the failure itself is the
/// terminal event. A stream ends at its first failure.
#[derive(Debug, Clone)]
pub struct Materialized<T> {
    items: Vec<T>,
    terminal: Option<Error>,
}

impl<T> Materialized<T> {
    /// A run that completed normally.
    #[must_use]
    pub fn completed(items: Vec<T>) -> Self {
        Self {
            items,
            terminal: None,
        }
    }

    /// A run that produced `items` and then failed with `error`.
    #[must_use]
    pub fn failed(items: Vec<T>, error: Error) -> Self {
        Self {
            items,
            terminal: Some(error),
        }
    }

    /// Elements produced, in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The terminal failure, if the run failed.
    #[must_use]
    pub fn terminal(&self) -> Option<&Error> {
        self.terminal.as_ref()
    }

    /// Number of elements produced.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no element was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits into elements and terminal failure.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<Error>) {
        (self.items, self.terminal)
    }

    /// The whole sequence, or the terminal failure.
    ///
    /// # Errors
    ///
    /// Returns the terminal failure when the run failed; elements produced
    /// before it are discarded.
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.terminal {
            Some(error) => Err(error),
            None => Ok(self.items),
        }
    }
}

impl<T: Clone> Materialized<T> {
    /// The run as seen from position `from` onwards: the remaining elements
    /// followed by the same terminal event.
    #[must_use]
    pub fn suffix(&self, from: usize) -> Self {
        let start = from.min(self.items.len());
        Self {
            items: self.items[start..].to_vec(),
            terminal: self.terminal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn completed_run_yields_items() {
        let run = Materialized::completed(vec![1, 2, 3]);
        assert_eq!(run.len(), 3);
        assert!(run.terminal().is_none());
        assert_eq!(run.into_result().expect("completed"), vec![1, 2, 3]);
    }

    #[test]
    fn failed_run_yields_terminal_error() {
        let run = Materialized::failed(vec![1], Error::not_supported("boom"));
        assert_eq!(run.items(), &[1]);
        let err = run.into_result().expect_err("failed");
        assert_eq!(err.kind(), ErrorKind::NotSupported);
    }

    #[test]
    fn suffix_keeps_terminal() {
        let run = Materialized::failed(vec![1, 2, 3], Error::user("late"));
        let tail = run.suffix(1);
        assert_eq!(tail.items(), &[2, 3]);
        assert_eq!(tail.terminal().map(Error::kind), Some(ErrorKind::User));

        let past_end = run.suffix(10);
        assert!(past_end.is_empty());
        assert!(past_end.terminal().is_some());
    }
}
