//! The interface to the key-value store whose values the [`Values1`](crate::Values1) ..
//! [`Values7`](crate::Values7) and [`Keys2`](crate::Keys2) capabilities read.
//!
//! This crate never owns a store. Anything which can look up a value by key and report whether a
//! key is present can be a store by implementing [`Lookup`]; implementations are provided for the
//! standard library's [`HashMap`] and [`BTreeMap`], and forwarded through references and smart
//! pointers. Every capability in this crate is then implemented automatically for every store
//! whose values have the right shape.

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    rc::Rc,
    sync::Arc,
};

/// A key-value store which can be read by key.
///
/// Implementations must be pure lookups: [`retrieve`](Lookup::retrieve) and
/// [`contains_key`](Lookup::contains_key) have no observable effect, and `contains_key(k)` is
/// `true` exactly when `retrieve(k)` is `Some`. A missing key is not an error.
///
/// # Examples
///
/// ```
/// use polytuple::{Dual, Lookup};
/// use std::collections::HashMap;
///
/// let mut store = HashMap::new();
/// store.insert("k", Dual::new(1, 'x'));
///
/// assert!(store.contains_key(&"k"));
/// assert_eq!(Lookup::retrieve(&store, &"k"), Some(&Dual::new(1, 'x')));
/// assert_eq!(Lookup::retrieve(&store, &"missing"), None);
/// ```
pub trait Lookup {
    /// The type of keys in this store.
    type Key;

    /// The type of values in this store.
    type Value;

    /// Borrow the value for `key`, or `None` if the key is not mapped.
    fn retrieve(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns `true` if `key` is mapped to a value.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.retrieve(key).is_some()
    }
}

impl<K, V, H> Lookup for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn retrieve(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl<K: Ord, V> Lookup for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn retrieve(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }
}

macro_rules! forward_lookup {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Lookup + ?Sized> Lookup for $ptr {
                type Key = T::Key;
                type Value = T::Value;

                fn retrieve(&self, key: &Self::Key) -> Option<&Self::Value> {
                    (**self).retrieve(key)
                }

                fn contains_key(&self, key: &Self::Key) -> bool {
                    (**self).contains_key(key)
                }
            }
        )*
    };
}

forward_lookup!(&'_ T, &'_ mut T, Box<T>, Rc<T>, Arc<T>);

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use traced::Traced;

#[cfg(feature = "tracing")]
mod traced {
    use super::Lookup;
    use std::fmt::Debug;

    /// A [`Lookup`] which forwards to an inner store, emitting a `TRACE`-level [`tracing`] event
    /// for every access.
    ///
    /// Each event carries the store's name, the key (by its [`Debug`] representation), and whether
    /// the key was found. Wrapping a store changes nothing about its contents or answers.
    ///
    /// # Examples
    ///
    /// ```
    /// use polytuple::{lookup::Traced, Dual, Values1, Values2};
    /// use std::collections::HashMap;
    ///
    /// let mut inner = HashMap::new();
    /// inner.insert(7u32, Dual::new("seven", 7.0));
    /// let store = Traced::new("numbers", inner);
    ///
    /// assert_eq!(store.get_first(&7), Some(&"seven"));
    /// assert_eq!(store.get_second(&8), None);
    /// ```
    #[derive(Debug, Clone)]
    pub struct Traced<S> {
        name: &'static str,
        inner: S,
    }

    impl<S> Traced<S> {
        /// Wrap `inner`, labelling its events with `name`.
        pub fn new(name: &'static str, inner: S) -> Self {
            Traced { name, inner }
        }

        /// The label attached to this store's events.
        pub fn name(&self) -> &'static str {
            self.name
        }

        /// Borrow the wrapped store.
        pub fn get_ref(&self) -> &S {
            &self.inner
        }

        /// Unwrap the inner store.
        pub fn into_inner(self) -> S {
            self.inner
        }
    }

    impl<S> Lookup for Traced<S>
    where
        S: Lookup,
        S::Key: Debug,
    {
        type Key = S::Key;
        type Value = S::Value;

        fn retrieve(&self, key: &Self::Key) -> Option<&Self::Value> {
            let value = self.inner.retrieve(key);
            tracing::trace!(store = self.name, ?key, hit = value.is_some(), "retrieve");
            value
        }

        fn contains_key(&self, key: &Self::Key) -> bool {
            let hit = self.inner.contains_key(key);
            tracing::trace!(store = self.name, ?key, hit, "contains_key");
            hit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dual, Single};

    #[test]
    fn missing_keys_are_not_errors() {
        let store: HashMap<u8, Single<u8>> = HashMap::new();
        assert_eq!(store.retrieve(&0), None);
        assert!(!Lookup::contains_key(&store, &0));
    }

    #[test]
    fn contains_key_agrees_with_retrieve() {
        let mut store = BTreeMap::new();
        let _ = store.insert(1, Dual::new('a', 'b'));

        for key in 0..3 {
            assert_eq!(
                Lookup::contains_key(&store, &key),
                store.retrieve(&key).is_some()
            );
        }
    }

    #[test]
    fn lookups_forward_through_pointers() {
        let mut map = HashMap::new();
        let _ = map.insert("k", Single::new(1));

        let shared = Arc::new(map.clone());
        let boxed: Box<dyn Lookup<Key = &str, Value = Single<i32>>> = Box::new(map);

        assert_eq!(shared.retrieve(&"k"), Some(&Single::new(1)));
        assert_eq!((&shared).retrieve(&"k"), Some(&Single::new(1)));
        assert_eq!(boxed.retrieve(&"k"), Some(&Single::new(1)));
        assert!(boxed.contains_key(&"k"));
    }
}
