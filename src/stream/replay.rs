//! Replays a recorded run as a fresh stream.

use super::{Materialized, Stream};
use crate::error::{Error, Result};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream that yields recorded elements as `Ok`, then the recorded
/// terminal failure (if any) as a single `Err`, then ends.
///
/// Created by [`replay`].
#[derive(Debug)]
pub struct Replay<T> {
    items: std::vec::IntoIter<T>,
    terminal: Option<Error>,
}

impl<T> Unpin for Replay<T> {}

impl<T> Stream for Replay<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(item) = self.items.next() {
            return Poll::Ready(Some(Ok(item)));
        }
        Poll::Ready(self.terminal.take().map(Err))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() + usize::from(self.terminal.is_some());
        (remaining, Some(remaining))
    }
}

/// Turns a recorded run back into a stream.
///
/// The stream always returns `Poll::Ready`, so it never needs a real waker.
#[must_use]
pub fn replay<T>(run: Materialized<T>) -> Replay<T> {
    let (items, terminal) = run.into_parts();
    Replay {
        items: items.into_iter(),
        terminal,
    }
}
