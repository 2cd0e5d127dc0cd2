//! Contextual map over a stream: the `extend` of [`Observable`].
//!
//! For a source that produces `x0, x1, ..., xn` and then ends with event
//! `e` (completion or failure), `many_select(f)` produces
//! `f(s0), f(s1), ..., f(sn)` followed by `e`, where `si` is a fresh
//! observable replaying `xi, ..., xn` and then `e`.
//!
//! If `f` fails at some position, that failure becomes the terminal event of
//! the output and no further positions are visited.

use super::{BoxStream, Materialized, Observable, Stream};
use crate::comonad::Element;
use crate::error::Result;
use std::marker::PhantomData;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

enum State<T> {
    /// Pulling the source to its terminal event.
    Collecting { source: BoxStream<T>, items: Vec<T> },
    /// Applying `f` to each suffix of the recorded run.
    Emitting { run: Materialized<T>, next: usize },
    Done,
}

/// Stream returned by [`Observable::many_select`].
#[must_use = "streams do nothing unless polled"]
pub struct ManySelect<T, U, F> {
    state: State<T>,
    f: Rc<F>,
    _output: PhantomData<fn() -> U>,
}

impl<T, U, F> ManySelect<T, U, F> {
    pub(crate) fn new(source: BoxStream<T>, f: Rc<F>) -> Self {
        Self {
            state: State::Collecting {
                source,
                items: Vec::new(),
            },
            f,
            _output: PhantomData,
        }
    }
}

impl<T, U, F> Unpin for ManySelect<T, U, F> {}

impl<T, U, F> std::fmt::Debug for ManySelect<T, U, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phase = match &self.state {
            State::Collecting { .. } => "collecting",
            State::Emitting { .. } => "emitting",
            State::Done => "done",
        };
        f.debug_struct("ManySelect").field("phase", &phase).finish()
    }
}

impl<T, U, F> Stream for ManySelect<T, U, F>
where
    T: Element,
    U: Element,
    F: Fn(Observable<T>) -> Result<U>,
{
    type Item = Result<U>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<U>>> {
        let this = self.get_mut();
        loop {
            match std::mem::replace(&mut this.state, State::Done) {
                State::Collecting {
                    mut source,
                    mut items,
                } => loop {
                    match source.as_mut().poll_next(cx) {
                        Poll::Ready(Some(Ok(item))) => items.push(item),
                        Poll::Ready(Some(Err(e))) => {
                            this.state = State::Emitting {
                                run: Materialized::failed(items, e),
                                next: 0,
                            };
                            break;
                        }
                        Poll::Ready(None) => {
                            this.state = State::Emitting {
                                run: Materialized::completed(items),
                                next: 0,
                            };
                            break;
                        }
                        Poll::Pending => {
                            this.state = State::Collecting { source, items };
                            return Poll::Pending;
                        }
                    }
                },
                State::Emitting { run, next } => {
                    if next < run.len() {
                        let suffix = Observable::from_materialized(run.suffix(next));
                        let result = (this.f)(suffix);
                        if result.is_ok() {
                            this.state = State::Emitting {
                                run,
                                next: next + 1,
                            };
                        }
                        return Poll::Ready(Some(result));
                    }
                    let (_, terminal) = run.into_parts();
                    return Poll::Ready(terminal.map(Err));
                }
                State::Done => return Poll::Ready(None),
            }
        }
    }
}
