//! Synchronous draining of fallible streams.
//!
//! The harness never observes a partially delivered stream: it drives the
//! futures in this module to completion on the calling thread with
//! [`block_on`]. A stream that stays `Pending` forever blocks forever; there
//! is no timeout.

use super::{Materialized, Stream};
use crate::error::Result;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

struct NoopWaker;

impl Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}
}

/// A waker that does nothing; polling loops re-poll on their own.
#[must_use]
pub fn noop_waker() -> Waker {
    Waker::from(Arc::new(NoopWaker))
}

/// Drives `future` to completion on the current thread.
///
/// On `Poll::Pending` the thread yields and the future is polled again.
pub fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = std::pin::pin!(future);
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    loop {
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => return output,
            Poll::Pending => std::thread::yield_now(),
        }
    }
}

/// A future that records every element of a stream of Results.
///
/// Stops at the first error, keeping the elements produced before it.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct Materialize<S, T> {
    stream: S,
    items: Vec<T>,
}

impl<S, T> Materialize<S, T> {
    /// Creates a new `Materialize` future.
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            items: Vec::new(),
        }
    }
}

impl<S: Unpin, T> Unpin for Materialize<S, T> {}

impl<S, T> Future for Materialize<S, T>
where
    S: Stream<Item = Result<T>> + Unpin,
{
    type Output = Materialized<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Materialized<T>> {
        loop {
            match Pin::new(&mut self.stream).poll_next(cx) {
                Poll::Ready(Some(Ok(item))) => self.items.push(item),
                Poll::Ready(Some(Err(e))) => {
                    let items = std::mem::take(&mut self.items);
                    return Poll::Ready(Materialized::failed(items, e));
                }
                Poll::Ready(None) => {
                    let items = std::mem::take(&mut self.items);
                    return Poll::Ready(Materialized::completed(items));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// A future that resolves to the first event of a stream of Results.
///
/// Resolves to `None` when the stream completes without an element. The rest
/// of the stream is never pulled.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct First<S> {
    stream: S,
}

impl<S> First<S> {
    /// Creates a new `First` future.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<S: Unpin> Unpin for First<S> {}

impl<S, T> Future for First<S>
where
    S: Stream<Item = Result<T>> + Unpin,
{
    type Output = Option<Result<T>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<T>>> {
        Pin::new(&mut self.stream).poll_next(cx)
    }
}
