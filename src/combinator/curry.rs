//! Partial application.
//!
//! `curry1` turns `(A, B) -> R` into `B -> R` by fixing `A`; `curry0` turns
//! `A -> R` into the deferred `() -> R`. The fixed argument is cloned on
//! every call, so the result may be called any number of times.

/// Fixes the first argument of a two-argument function.
///
/// # Examples
///
/// ```
/// use comonad_laws::combinator::curry1;
///
/// let add = |a: i32, b: i32| a + b;
/// let add_two = curry1(add, 2);
/// assert_eq!(add_two(40), 42);
/// ```
pub fn curry1<A, B, R, F>(f: F, a: A) -> impl Fn(B) -> R + Clone
where
    F: Fn(A, B) -> R + Clone,
    A: Clone,
{
    move |b: B| f(a.clone(), b)
}

/// Fixes the only argument of a one-argument function, producing a thunk.
///
/// Nothing runs until the returned closure is called.
///
/// # Examples
///
/// ```
/// use comonad_laws::combinator::curry0;
///
/// let len = |s: String| s.len();
/// let deferred = curry0(len, "four".to_string());
/// assert_eq!(deferred(), 4);
/// ```
pub fn curry0<A, R, F>(f: F, a: A) -> impl Fn() -> R + Clone
where
    F: Fn(A) -> R + Clone,
    A: Clone,
{
    move || f(a.clone())
}
