//! A "null" store for the [`polytuple`] crate which maps no keys at all.
//!
//! This store is useful primarily for benchmarking and testing, as it does the absolute minimum
//! amount of work, so that it is easier to isolate the cost of the capability traits themselves
//! and to exercise what every getter does when a key is missing. It can stand in for a store of
//! any key and value types, but every lookup misses.

#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]

#[macro_use]
extern crate derivative;

use polytuple::Lookup;
use std::marker::PhantomData;

/// A store with keys of type `K` and values of type `V`, which never contains anything.
///
/// `Null` is zero-sized, and is [`Copy`], [`Default`], and [`Debug`](std::fmt::Debug) no matter
/// what `K` and `V` are.
///
/// # Examples
///
/// ```
/// use polytuple::{Dual, Keys2, Lookup, Triple, Values3};
/// use polytuple_null as null;
///
/// let store: null::Null<Dual<u8, u8>, Triple<(), (), ()>> = null::store();
///
/// assert!(!store.contains_key_of(1, 2));
/// assert_eq!(store.retrieve_of(1, 2), None);
/// assert_eq!(store.get_third(&Dual::new(1, 2)), None);
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct Null<K, V> {
    #[derivative(Debug = "ignore")]
    _types: PhantomData<fn() -> (K, V)>,
}

/// Create an empty store for any key and value types.
///
/// # Examples
///
/// ```
/// use polytuple::{Single, Values1};
///
/// let store = polytuple_null::store::<&str, Single<u64>>();
/// assert_eq!(store.get_first(&"anything"), None);
/// ```
pub fn store<K, V>() -> Null<K, V> {
    Null::default()
}

impl<K, V> Lookup for Null<K, V> {
    type Key = K;
    type Value = V;

    fn retrieve(&self, _key: &K) -> Option<&V> {
        None
    }

    fn contains_key(&self, _key: &K) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polytuple::{Dual, Hepta, Values7};
    use std::mem;

    #[test]
    fn null_is_zero_sized() {
        assert_eq!(mem::size_of::<Null<String, Hepta<u8, u8, u8, u8, u8, u8, u8>>>(), 0);
    }

    #[test]
    fn every_lookup_misses() {
        let store = store::<u32, Hepta<u8, u8, u8, u8, u8, u8, u8>>();
        for key in 0..4 {
            assert!(!store.contains_key(&key));
            assert_eq!(store.retrieve(&key), None);
            assert_eq!(store.get_seventh(&key), None);
        }
    }

    #[test]
    fn null_stores_are_interchangeable() {
        let a = store::<Dual<u8, u8>, ()>();
        let b = a;
        assert_eq!(a, b);
        assert!(format!("{:?}", a).starts_with("Null"));
    }
}
