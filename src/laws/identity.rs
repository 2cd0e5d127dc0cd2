//! Law1 and Law2: the two identity laws.

use super::{Law, LawCase};
use crate::combinator::{compose, curry0, curry1};
use crate::comonad::{Comonad, Element, extend, extract, to_ordered_vec};
use crate::error::Result;

/// Law1 (left identity): `extend(extract, w) ≃ w`.
///
/// Both sides are compared through their ordered materialization. When
/// materializing `w` fails, materializing `extend(extract, w)` must fail the
/// same way.
pub fn left_identity<W>(w: W) -> LawCase<Vec<W::Item>>
where
    W: Comonad,
    W::Item: PartialEq,
{
    let id = curry1(extend::<W, W::Item, _>, extract::<W>);

    LawCase::new(
        Law::LeftIdentity,
        curry0(to_ordered_vec::<W>, w.clone()),
        curry0(compose(to_ordered_vec::<W::Of<W::Item>>, id), w),
        |l: &Vec<W::Item>, r: &Vec<W::Item>| l == r,
    )
}

/// Law2 (right identity): `extract(extend(f, w)) ≃ f(w)`.
pub fn right_identity<W, U, F>(f: F, w: W) -> LawCase<U>
where
    W: Comonad,
    U: Element + PartialEq,
    F: Fn(W) -> Result<U> + Clone + 'static,
{
    let wt2wu = curry1(extend::<W, U, F>, f.clone());
    let same_as_f = compose(extract::<W::Of<U>>, wt2wu);

    LawCase::new(
        Law::RightIdentity,
        curry0(f, w.clone()),
        curry0(same_as_f, w),
        |l: &U, r: &U| l == r,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::stream::Observable;

    fn sides<R: 'static>(case: LawCase<R>) -> (Result<R>, Result<R>) {
        let (left, right, _) = case.into_parts();
        (left.force(), right.force())
    }

    #[test]
    fn left_identity_on_values() {
        let (l, r) = sides(left_identity(Observable::from_values(vec![1, 2, 3])));
        assert_eq!(l.expect("left"), vec![1, 2, 3]);
        assert_eq!(r.expect("right"), vec![1, 2, 3]);
    }

    #[test]
    fn left_identity_on_failure_fails_both_sides() {
        let w = Observable::<i32>::fail(Error::invalid_operation("boom"));
        let (l, r) = sides(left_identity(w));
        let (l, r) = (l.expect_err("left"), r.expect_err("right"));
        assert!(l.same_failure(&r));
    }

    #[test]
    fn right_identity_on_value() {
        let parse = |w: Observable<String>| -> Result<i32> { Ok(w.first()?.parse::<i32>()?) };
        let (l, r) = sides(right_identity(parse, Observable::just("42".to_string())));
        assert_eq!(l.expect("left"), 42);
        assert_eq!(r.expect("right"), 42);
    }

    #[test]
    fn right_identity_on_empty_raises_empty_source_twice() {
        let head = |w: Observable<String>| w.first();
        let (l, r) = sides(right_identity(head, Observable::empty()));
        assert_eq!(l.expect_err("left").kind(), ErrorKind::EmptySource);
        assert_eq!(r.expect_err("right").kind(), ErrorKind::EmptySource);
    }

    #[test]
    fn equality_is_the_supplied_one() {
        let case = right_identity(|w: Observable<u8>| w.first(), Observable::just(1));
        let (_, _, eq) = case.into_parts();
        assert!(eq(&1, &1));
        assert!(!eq(&1, &2));
    }
}
