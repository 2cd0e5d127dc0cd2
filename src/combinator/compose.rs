//! Function composition.

/// Composes two functions: the result maps `a` to `outer(inner(a))`.
///
/// Nothing is caught or suppressed. When `inner` returns a `Result`, an `Err`
/// is handed to `outer` (and from there to the caller) unchanged.
///
/// # Examples
///
/// ```
/// use comonad_laws::combinator::compose;
///
/// let len_plus_one = compose(|n: usize| n + 1, |s: &str| s.len());
/// assert_eq!(len_plus_one("abc"), 4);
/// ```
pub fn compose<A, B, R, O, I>(outer: O, inner: I) -> impl Fn(A) -> R + Clone
where
    O: Fn(B) -> R + Clone,
    I: Fn(A) -> B + Clone,
{
    move |a: A| outer(inner(a))
}
