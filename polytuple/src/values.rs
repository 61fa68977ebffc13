//! Typed element accessors for stores whose values are tuples.
//!
//! [`Values1<K, A>`](Values1) through [`Values7<K, A, .., G>`](Values7) describe a store keyed by
//! `K` whose values hold *at least* the given element types, in order, and give it the methods
//! [`get_first`](Values1::get_first) through [`get_seventh`](Values7::get_seventh). Each trait
//! extends the one before it, so a store that is [`Values4`] is also [`Values3`], [`Values2`], and
//! [`Values1`] over the same leading types.
//!
//! These traits are implemented automatically for every [`Lookup`] whose values implement the
//! corresponding [`Get`] positions, and should never need to be implemented by hand. They are
//! most useful as bounds, naming exactly the slice of a store's shape some code relies upon:
//!
//! ```
//! use polytuple::{Triple, Values2};
//! use std::collections::HashMap;
//!
//! fn describe<S: Values2<u32, String, f64>>(store: &S, id: u32) -> Option<String> {
//!     Some(format!("{} ({})", store.get_first(&id)?, store.get_second(&id)?))
//! }
//!
//! let mut store = HashMap::new();
//! store.insert(1, Triple::new("kettle".to_string(), 2.5, 'k'));
//!
//! assert_eq!(describe(&store, 1).as_deref(), Some("kettle (2.5)"));
//! assert_eq!(describe(&store, 2), None);
//! ```
//!
//! A missing key produces `None` from every getter; the getters do not distinguish a key that was
//! never mapped from one that was removed.
//!
//! [`Get`]: crate::index::Get

use crate::{
    index::{Get, _0, _1, _2, _3, _4, _5, _6},
    Lookup,
};

/// A store whose values have at least one element, the first of type `A`.
pub trait Values1<K, A>: Lookup<Key = K> {
    /// The first element of the value for `key`, or `None` if the key is not mapped.
    fn get_first(&self, key: &K) -> Option<&A>;
}

impl<S, K, A> Values1<K, A> for S
where
    S: Lookup<Key = K>,
    S::Value: Get<_0, Output = A>,
{
    fn get_first(&self, key: &K) -> Option<&A> {
        self.retrieve(key).map(Get::<_0>::get)
    }
}

/// A store whose values have at least two elements, of types `A` and `B`.
pub trait Values2<K, A, B>: Values1<K, A> {
    /// The second element of the value for `key`, or `None` if the key is not mapped.
    fn get_second(&self, key: &K) -> Option<&B>;
}

impl<S, K, A, B> Values2<K, A, B> for S
where
    S: Lookup<Key = K>,
    S::Value: Get<_0, Output = A> + Get<_1, Output = B>,
{
    fn get_second(&self, key: &K) -> Option<&B> {
        self.retrieve(key).map(Get::<_1>::get)
    }
}

/// A store whose values have at least three elements, of types `A`, `B`, and `C`.
pub trait Values3<K, A, B, C>: Values2<K, A, B> {
    /// The third element of the value for `key`, or `None` if the key is not mapped.
    fn get_third(&self, key: &K) -> Option<&C>;
}

impl<S, K, A, B, C> Values3<K, A, B, C> for S
where
    S: Lookup<Key = K>,
    S::Value: Get<_0, Output = A> + Get<_1, Output = B> + Get<_2, Output = C>,
{
    fn get_third(&self, key: &K) -> Option<&C> {
        self.retrieve(key).map(Get::<_2>::get)
    }
}

/// A store whose values have at least four elements.
pub trait Values4<K, A, B, C, D>: Values3<K, A, B, C> {
    /// The fourth element of the value for `key`, or `None` if the key is not mapped.
    fn get_fourth(&self, key: &K) -> Option<&D>;
}

impl<S, K, A, B, C, D> Values4<K, A, B, C, D> for S
where
    S: Lookup<Key = K>,
    S::Value: Get<_0, Output = A>
        + Get<_1, Output = B>
        + Get<_2, Output = C>
        + Get<_3, Output = D>,
{
    fn get_fourth(&self, key: &K) -> Option<&D> {
        self.retrieve(key).map(Get::<_3>::get)
    }
}

/// A store whose values have at least five elements.
pub trait Values5<K, A, B, C, D, E>: Values4<K, A, B, C, D> {
    /// The fifth element of the value for `key`, or `None` if the key is not mapped.
    fn get_fifth(&self, key: &K) -> Option<&E>;
}

impl<S, K, A, B, C, D, E> Values5<K, A, B, C, D, E> for S
where
    S: Lookup<Key = K>,
    S::Value: Get<_0, Output = A>
        + Get<_1, Output = B>
        + Get<_2, Output = C>
        + Get<_3, Output = D>
        + Get<_4, Output = E>,
{
    fn get_fifth(&self, key: &K) -> Option<&E> {
        self.retrieve(key).map(Get::<_4>::get)
    }
}

/// A store whose values have at least six elements.
pub trait Values6<K, A, B, C, D, E, F>: Values5<K, A, B, C, D, E> {
    /// The sixth element of the value for `key`, or `None` if the key is not mapped.
    fn get_sixth(&self, key: &K) -> Option<&F>;
}

impl<S, K, A, B, C, D, E, F> Values6<K, A, B, C, D, E, F> for S
where
    S: Lookup<Key = K>,
    S::Value: Get<_0, Output = A>
        + Get<_1, Output = B>
        + Get<_2, Output = C>
        + Get<_3, Output = D>
        + Get<_4, Output = E>
        + Get<_5, Output = F>,
{
    fn get_sixth(&self, key: &K) -> Option<&F> {
        self.retrieve(key).map(Get::<_5>::get)
    }
}

/// A store whose values have seven elements.
pub trait Values7<K, A, B, C, D, E, F, G>: Values6<K, A, B, C, D, E, F> {
    /// The seventh element of the value for `key`, or `None` if the key is not mapped.
    fn get_seventh(&self, key: &K) -> Option<&G>;
}

impl<S, K, A, B, C, D, E, F, G> Values7<K, A, B, C, D, E, F, G> for S
where
    S: Lookup<Key = K>,
    S::Value: Get<_0, Output = A>
        + Get<_1, Output = B>
        + Get<_2, Output = C>
        + Get<_3, Output = D>
        + Get<_4, Output = E>
        + Get<_5, Output = F>
        + Get<_6, Output = G>,
{
    fn get_seventh(&self, key: &K) -> Option<&G> {
        self.retrieve(key).map(Get::<_6>::get)
    }
}
