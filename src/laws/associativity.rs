//! Law3: associativity of `extend`.

use super::{Law, LawCase};
use crate::combinator::{compose, curry0, curry1};
use crate::comonad::{Comonad, Element, extend, to_ordered_vec};
use crate::error::Result;

/// Law3 (associativity): `extend(g, extend(f, w)) ≃ extend(g ∘ extend(f), w)`.
///
/// - left: `compose(curry1(extend, g), curry1(extend, f))(w)`
/// - right: `curry1(extend, compose(g, curry1(extend, f)))(w)`
///
/// Both sides are compared through their ordered materialization.
pub fn associativity<W, U, V, F, G>(f: F, g: G, w: W) -> LawCase<Vec<V>>
where
    W: Comonad,
    U: Element,
    V: Element + PartialEq,
    F: Fn(W) -> Result<U> + Clone + 'static,
    G: Fn(W::Of<U>) -> Result<V> + Clone + 'static,
{
    let extend_f = curry1(extend::<W, U, F>, f);

    let left = compose(curry1(extend::<W::Of<U>, V, G>, g.clone()), extend_f.clone());
    let right = curry1(extend::<W, V, _>, compose(g, extend_f));

    LawCase::new(
        Law::Associativity,
        curry0(
            compose(to_ordered_vec::<<W::Of<U> as Comonad>::Of<V>>, left),
            w.clone(),
        ),
        curry0(compose(to_ordered_vec::<W::Of<V>>, right), w),
        |l: &Vec<V>, r: &Vec<V>| l == r,
    )
}
