//! Stores keyed by two-part composite keys.
//!
//! When a store's key is itself a [`Dual<K1, K2>`](Dual), [`Keys2<K1, K2>`](Keys2) lets it be
//! driven by the two loose key parts instead of a pre-built key, and this module's
//! [`Values1`] through [`Values7`] re-expose the typed getters of
//! [`crate::Values1`] .. [`crate::Values7`] in that same two-argument form
//! ([`get_first_of`](Values1::get_first_of) .. [`get_seventh_of`](Values7::get_seventh_of)).
//!
//! A consumer names the pairing it needs, `keys2::ValuesN<K1, K2, ..>`, and gets exactly the
//! getters for the first `N` elements, no more:
//!
//! ```
//! use polytuple::{keys2, Dual};
//! use std::collections::HashMap;
//!
//! fn price<S: keys2::Values2<String, u32, String, u64>>(store: &S, sku: &str, region: u32) -> u64 {
//!     store.get_second_of(sku.to_string(), region).copied().unwrap_or(0)
//! }
//!
//! let mut store = HashMap::new();
//! store.insert(Dual::new("tea".to_string(), 44), Dual::new("Tea, loose".to_string(), 1250u64));
//!
//! assert_eq!(price(&store, "tea", 44), 1250);
//! assert_eq!(price(&store, "tea", 45), 0);
//! ```
//!
//! Every call builds a fresh composite key from its parts; nothing is cached between calls. Key
//! parts are expected to be small and cheap to combine.

use crate::{
    index::{Get, _0, _1, _2, _3, _4, _5, _6},
    values, Dual, Lookup,
};

/// A store keyed by a two-part composite key `Dual<K1, K2>`.
///
/// This trait is implemented automatically for every [`Lookup`] with such a key.
///
/// # Examples
///
/// ```
/// use polytuple::{Dual, Keys2, Single};
/// use std::collections::BTreeMap;
///
/// let mut store = BTreeMap::new();
/// store.insert(Dual::new('a', 'b'), Single::new(1));
///
/// assert!(store.contains_key_of('a', 'b'));
/// assert!(!store.contains_key_of('b', 'a'));
/// assert_eq!(store.retrieve_of('a', 'b'), Some(&Single::new(1)));
/// ```
pub trait Keys2<K1, K2>: Lookup<Key = Dual<K1, K2>> {
    /// Build the composite key for the parts `k1` and `k2`.
    ///
    /// This touches nothing but its arguments: the result depends only on `k1` and `k2`, in that
    /// order, and a fresh key is returned each time.
    fn get_key(&self, k1: K1, k2: K2) -> Dual<K1, K2> {
        Dual::new(k1, k2)
    }

    /// Returns `true` if the composite key of `k1` and `k2` is mapped.
    fn contains_key_of(&self, k1: K1, k2: K2) -> bool {
        self.contains_key(&self.get_key(k1, k2))
    }

    /// Borrow the value for the composite key of `k1` and `k2`, or `None` if it is not mapped.
    fn retrieve_of(&self, k1: K1, k2: K2) -> Option<&Self::Value> {
        self.retrieve(&self.get_key(k1, k2))
    }
}

impl<S, K1, K2> Keys2<K1, K2> for S where S: Lookup<Key = Dual<K1, K2>> {}

/// A composite-keyed store whose values have at least one element, the first of type `A`.
pub trait Values1<K1, K2, A>: Keys2<K1, K2> + values::Values1<Dual<K1, K2>, A> {
    /// The first element of the value for the composite key of `k1` and `k2`.
    fn get_first_of(&self, k1: K1, k2: K2) -> Option<&A> {
        self.get_first(&self.get_key(k1, k2))
    }
}

impl<S, K1, K2, A> Values1<K1, K2, A> for S
where
    S: Lookup<Key = Dual<K1, K2>>,
    S::Value: Get<_0, Output = A>,
{
}

/// A composite-keyed store whose values have at least two elements, of types `A` and `B`.
pub trait Values2<K1, K2, A, B>: Values1<K1, K2, A> + values::Values2<Dual<K1, K2>, A, B> {
    /// The second element of the value for the composite key of `k1` and `k2`.
    fn get_second_of(&self, k1: K1, k2: K2) -> Option<&B> {
        self.get_second(&self.get_key(k1, k2))
    }
}

impl<S, K1, K2, A, B> Values2<K1, K2, A, B> for S
where
    S: Lookup<Key = Dual<K1, K2>>,
    S::Value: Get<_0, Output = A> + Get<_1, Output = B>,
{
}

/// A composite-keyed store whose values have at least three elements.
pub trait Values3<K1, K2, A, B, C>:
    Values2<K1, K2, A, B> + values::Values3<Dual<K1, K2>, A, B, C>
{
    /// The third element of the value for the composite key of `k1` and `k2`.
    fn get_third_of(&self, k1: K1, k2: K2) -> Option<&C> {
        self.get_third(&self.get_key(k1, k2))
    }
}

impl<S, K1, K2, A, B, C> Values3<K1, K2, A, B, C> for S
where
    S: Lookup<Key = Dual<K1, K2>>,
    S::Value: Get<_0, Output = A> + Get<_1, Output = B> + Get<_2, Output = C>,
{
}

/// A composite-keyed store whose values have at least four elements.
pub trait Values4<K1, K2, A, B, C, D>:
    Values3<K1, K2, A, B, C> + values::Values4<Dual<K1, K2>, A, B, C, D>
{
    /// The fourth element of the value for the composite key of `k1` and `k2`.
    fn get_fourth_of(&self, k1: K1, k2: K2) -> Option<&D> {
        self.get_fourth(&self.get_key(k1, k2))
    }
}

impl<S, K1, K2, A, B, C, D> Values4<K1, K2, A, B, C, D> for S
where
    S: Lookup<Key = Dual<K1, K2>>,
    S::Value: Get<_0, Output = A>
        + Get<_1, Output = B>
        + Get<_2, Output = C>
        + Get<_3, Output = D>,
{
}

/// A composite-keyed store whose values have at least five elements.
pub trait Values5<K1, K2, A, B, C, D, E>:
    Values4<K1, K2, A, B, C, D> + values::Values5<Dual<K1, K2>, A, B, C, D, E>
{
    /// The fifth element of the value for the composite key of `k1` and `k2`.
    fn get_fifth_of(&self, k1: K1, k2: K2) -> Option<&E> {
        self.get_fifth(&self.get_key(k1, k2))
    }
}

impl<S, K1, K2, A, B, C, D, E> Values5<K1, K2, A, B, C, D, E> for S
where
    S: Lookup<Key = Dual<K1, K2>>,
    S::Value: Get<_0, Output = A>
        + Get<_1, Output = B>
        + Get<_2, Output = C>
        + Get<_3, Output = D>
        + Get<_4, Output = E>,
{
}

/// A composite-keyed store whose values have at least six elements.
pub trait Values6<K1, K2, A, B, C, D, E, F>:
    Values5<K1, K2, A, B, C, D, E> + values::Values6<Dual<K1, K2>, A, B, C, D, E, F>
{
    /// The sixth element of the value for the composite key of `k1` and `k2`.
    fn get_sixth_of(&self, k1: K1, k2: K2) -> Option<&F> {
        self.get_sixth(&self.get_key(k1, k2))
    }
}

impl<S, K1, K2, A, B, C, D, E, F> Values6<K1, K2, A, B, C, D, E, F> for S
where
    S: Lookup<Key = Dual<K1, K2>>,
    S::Value: Get<_0, Output = A>
        + Get<_1, Output = B>
        + Get<_2, Output = C>
        + Get<_3, Output = D>
        + Get<_4, Output = E>
        + Get<_5, Output = F>,
{
}

/// A composite-keyed store whose values have seven elements.
pub trait Values7<K1, K2, A, B, C, D, E, F, G>:
    Values6<K1, K2, A, B, C, D, E, F> + values::Values7<Dual<K1, K2>, A, B, C, D, E, F, G>
{
    /// The seventh element of the value for the composite key of `k1` and `k2`.
    fn get_seventh_of(&self, k1: K1, k2: K2) -> Option<&G> {
        self.get_seventh(&self.get_key(k1, k2))
    }
}

impl<S, K1, K2, A, B, C, D, E, F, G> Values7<K1, K2, A, B, C, D, E, F, G> for S
where
    S: Lookup<Key = Dual<K1, K2>>,
    S::Value: Get<_0, Output = A>
        + Get<_1, Output = B>
        + Get<_2, Output = C>
        + Get<_3, Output = D>
        + Get<_4, Output = E>
        + Get<_5, Output = F>
        + Get<_6, Output = G>,
{
}
