//! Tuples whose element types are only known at runtime.
//!
//! An [`ErasedTuple`] holds any number of [`Element`]s behind trait objects, recording nothing
//! about their types in its own. It still compares and hashes structurally, element by element,
//! and hashes exactly as the statically typed tuple it was built from would. Reading an element
//! back out names the expected type, and a wrong guess is reported as [`Error::TypeMismatch`]
//! rather than coerced.
//!
//! # Examples
//!
//! ```
//! use polytuple::{Dual, ErasedTuple, Error};
//! use std::convert::TryFrom;
//!
//! let erased = ErasedTuple::from(Dual::new(7u8, "seven".to_string()));
//! assert_eq!(erased.len(), 2);
//! assert_eq!(erased.first::<u8>(), Ok(&7));
//! assert!(matches!(erased.second::<u8>(), Err(Error::TypeMismatch { index: 1, .. })));
//!
//! let dual = Dual::<u8, String>::try_from(erased).unwrap();
//! assert_eq!(dual.second(), "seven");
//! ```

use crate::{Error, Lookup};
use std::{
    any::{self, Any},
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    iter::FromIterator,
    ptr, vec,
};

/// A value which can be stored in an [`ErasedTuple`].
///
/// This is implemented for every `'static` type which is [`Debug`], [`Clone`], [`Eq`], [`Hash`],
/// [`Send`], and [`Sync`], and gives trait objects of those types equality, hashing, cloning and
/// downcasting.
pub trait Element: Any + Debug + Send + Sync {
    /// The name of this element's concrete type, as given by [`std::any::type_name`].
    fn type_name(&self) -> &'static str;

    /// This element as [`Any`], for downcasting by reference.
    fn as_any(&self) -> &dyn Any;

    /// This element as [`Any`], for downcasting by value.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Clone this element into a new box.
    fn clone_element(&self) -> Box<dyn Element>;

    /// Returns `true` if `other` has the same concrete type as this element and is equal to it.
    fn eq_element(&self, other: &dyn Element) -> bool;

    /// Feed this element into `state`, exactly as its [`Hash`] implementation would.
    fn hash_element(&self, state: &mut dyn Hasher);
}

impl<T> Element for T
where
    T: Any + Debug + Clone + Eq + Hash + Send + Sync,
{
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_element(&self) -> Box<dyn Element> {
        Box::new(self.clone())
    }

    fn eq_element(&self, other: &dyn Element) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn hash_element(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state)
    }
}

/// An immutable, ordered sequence of [`Element`]s of any types.
///
/// Every variant from [`Unit`](crate::Unit) to [`Hepta`](crate::Hepta) converts into an
/// `ErasedTuple` with [`From`], provided its elements are [`Element`]s, and back out again with
/// [`TryFrom`](std::convert::TryFrom), which checks both the length and every element's type.
pub struct ErasedTuple {
    elements: Vec<Box<dyn Element>>,
}

impl ErasedTuple {
    /// Build an erased tuple from its elements, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use polytuple::{erased::Element, ErasedTuple};
    ///
    /// let erased = ErasedTuple::from_elements(vec![Box::new(1i32) as Box<dyn Element>, Box::new('c')]);
    /// assert_eq!(erased.type_names().collect::<Vec<_>>(), vec!["i32", "char"]);
    /// ```
    pub fn from_elements(elements: Vec<Box<dyn Element>>) -> Self {
        ErasedTuple { elements }
    }

    /// The number of elements in this tuple.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if this tuple has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The names of the types of this tuple's elements, in order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.elements.iter().map(|element| element.type_name())
    }

    /// Borrow the element at `index` without naming its type.
    pub fn element(&self, index: usize) -> Option<&dyn Element> {
        self.elements.get(index).map(|element| &**element)
    }

    /// Borrow the element at `index` as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if there is no element at `index`, and
    /// [`Error::TypeMismatch`] if there is one but it is not a `T`.
    pub fn get<T: Any>(&self, index: usize) -> Result<&T, Error> {
        let element = self.element(index).ok_or(Error::OutOfBounds {
            index,
            length: self.len(),
        })?;
        element
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| Error::TypeMismatch {
                index,
                expected: any::type_name::<T>(),
                found: element.type_name(),
            })
    }

    /// Borrow the first element as a `T`; see [`get`](ErasedTuple::get).
    pub fn first<T: Any>(&self) -> Result<&T, Error> {
        self.get(0)
    }

    /// Borrow the second element as a `T`; see [`get`](ErasedTuple::get).
    pub fn second<T: Any>(&self) -> Result<&T, Error> {
        self.get(1)
    }

    /// Borrow the third element as a `T`; see [`get`](ErasedTuple::get).
    pub fn third<T: Any>(&self) -> Result<&T, Error> {
        self.get(2)
    }

    /// Borrow the fourth element as a `T`; see [`get`](ErasedTuple::get).
    pub fn fourth<T: Any>(&self) -> Result<&T, Error> {
        self.get(3)
    }

    /// Borrow the fifth element as a `T`; see [`get`](ErasedTuple::get).
    pub fn fifth<T: Any>(&self) -> Result<&T, Error> {
        self.get(4)
    }

    /// Borrow the sixth element as a `T`; see [`get`](ErasedTuple::get).
    pub fn sixth<T: Any>(&self) -> Result<&T, Error> {
        self.get(5)
    }

    /// Borrow the seventh element as a `T`; see [`get`](ErasedTuple::get).
    pub fn seventh<T: Any>(&self) -> Result<&T, Error> {
        self.get(6)
    }

    /// Take the elements out of this tuple for conversion into a variant of length `expected`.
    pub(crate) fn into_elements(self, expected: usize) -> Result<Elements, Error> {
        if self.len() != expected {
            return Err(Error::ArityMismatch {
                expected,
                found: self.len(),
            });
        }
        Ok(Elements {
            length: expected,
            index: 0,
            inner: self.elements.into_iter(),
        })
    }
}

impl FromIterator<Box<dyn Element>> for ErasedTuple {
    fn from_iter<I: IntoIterator<Item = Box<dyn Element>>>(iter: I) -> Self {
        ErasedTuple::from_elements(iter.into_iter().collect())
    }
}

impl Clone for ErasedTuple {
    fn clone(&self) -> Self {
        self.elements
            .iter()
            .map(|element| element.clone_element())
            .collect()
    }
}

impl Debug for ErasedTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.elements
            .iter()
            .fold(&mut f.debug_tuple("ErasedTuple"), |tuple, element| {
                tuple.field(element)
            })
            .finish()
    }
}

impl PartialEq for ErasedTuple {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
            || (self.len() == other.len()
                && self
                    .elements
                    .iter()
                    .zip(other.elements.iter())
                    .all(|(mine, theirs)| mine.eq_element(&**theirs)))
    }
}

impl Eq for ErasedTuple {}

impl Hash for ErasedTuple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in &self.elements {
            element.hash_element(state);
        }
    }
}

/// The elements of an [`ErasedTuple`] being moved into a typed variant, one at a time.
pub(crate) struct Elements {
    length: usize,
    index: usize,
    inner: vec::IntoIter<Box<dyn Element>>,
}

impl Elements {
    /// Move the next element out as a `T`.
    pub(crate) fn next_as<T: Any>(&mut self) -> Result<T, Error> {
        let index = self.index;
        let element = self.inner.next().ok_or(Error::OutOfBounds {
            index,
            length: self.length,
        })?;
        self.index += 1;

        let found = element.type_name();
        element
            .into_any()
            .downcast::<T>()
            .map(|element| *element)
            .map_err(|_| Error::TypeMismatch {
                index,
                expected: any::type_name::<T>(),
                found,
            })
    }
}

/// A store whose values are [`ErasedTuple`]s, read with the element type named at each call.
///
/// This is implemented automatically for every [`Lookup`] with `ErasedTuple` values.
///
/// # Examples
///
/// ```
/// use polytuple::{Dual, ErasedTuple, ErasedValues, Error};
/// use std::collections::HashMap;
///
/// let mut store = HashMap::new();
/// store.insert("k", ErasedTuple::from(Dual::new(1u32, 'x')));
///
/// assert_eq!(store.try_get::<u32>(&"k", 0), Ok(Some(&1)));
/// assert_eq!(store.try_get::<u32>(&"missing", 0), Ok(None));
/// assert!(matches!(store.try_get::<u32>(&"k", 1), Err(Error::TypeMismatch { .. })));
/// ```
pub trait ErasedValues<K>: Lookup<Key = K, Value = ErasedTuple> {
    /// Borrow the element at `index` of the value for `key` as a `T`, or `Ok(None)` if the key is
    /// not mapped.
    ///
    /// # Errors
    ///
    /// Fails as [`ErasedTuple::get`] does when the key is mapped but the element is missing or of
    /// another type.
    fn try_get<T: Any>(&self, key: &K, index: usize) -> Result<Option<&T>, Error> {
        self.retrieve(key).map(|tuple| tuple.get(index)).transpose()
    }
}

impl<S, K> ErasedValues<K> for S where S: Lookup<Key = K, Value = ErasedTuple> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dual, Hepta, Single, Triple, Unit, UNIT};
    use std::{
        collections::{hash_map::DefaultHasher, HashMap},
        convert::TryFrom,
    };

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn elements_read_back_by_type() {
        let erased = ErasedTuple::from(Triple::new(1i64, "x".to_string(), true));
        assert_eq!(erased.first::<i64>(), Ok(&1));
        assert_eq!(erased.second::<String>().map(String::as_str), Ok("x"));
        assert_eq!(erased.third::<bool>(), Ok(&true));
    }

    #[test]
    fn wrong_type_is_reported() {
        let erased = ErasedTuple::from(Single::new(1u8));
        assert_eq!(
            erased.first::<u16>(),
            Err(Error::TypeMismatch {
                index: 0,
                expected: "u16",
                found: "u8",
            })
        );
    }

    #[test]
    fn missing_position_is_reported() {
        let erased = ErasedTuple::from(Single::new(1u8));
        assert_eq!(
            erased.seventh::<u8>(),
            Err(Error::OutOfBounds {
                index: 6,
                length: 1
            })
        );
    }

    #[test]
    fn equality_needs_matching_lengths_and_types() {
        let one = ErasedTuple::from(Single::new(1u8));
        assert_eq!(one, ErasedTuple::from(Single::new(1u8)));
        assert_ne!(one, ErasedTuple::from(Single::new(1u16)));
        assert_ne!(one, ErasedTuple::from(Dual::new(1u8, 1u8)));
        assert_ne!(ErasedTuple::from(UNIT), one);
        assert_eq!(ErasedTuple::from(UNIT), ErasedTuple::from(Unit::new()));
    }

    #[test]
    fn hash_matches_static_tuple() {
        let typed = Hepta::new(1u8, 'b', "c", 4u64, Some(5i32), (), vec![7u8]);
        let erased = ErasedTuple::from(typed.clone());
        assert_eq!(hash_of(&erased), hash_of(&typed));
        assert_eq!(hash_of(&erased), hash_of(&erased.clone()));
    }

    #[test]
    fn nested_erased_tuples_compare_by_content() {
        let inner = || ErasedTuple::from(Dual::new('a', 2u32));
        let a = ErasedTuple::from(Dual::new(inner(), Some("x")));
        let b = ErasedTuple::from(Dual::new(inner(), Some("x")));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.first::<ErasedTuple>().map(ErasedTuple::len), Ok(2));
    }

    #[test]
    fn converts_back_into_variants() {
        let erased = ErasedTuple::from(Dual::new(3u8, 'z'));
        assert_eq!(Dual::<u8, char>::try_from(erased.clone()), Ok(Dual::new(3, 'z')));
        assert_eq!(
            Dual::<u8, u8>::try_from(erased.clone()),
            Err(Error::TypeMismatch {
                index: 1,
                expected: "u8",
                found: "char",
            })
        );
        assert_eq!(
            Triple::<u8, char, ()>::try_from(erased),
            Err(Error::ArityMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(Unit::try_from(ErasedTuple::from(UNIT)), Ok(UNIT));
    }

    #[test]
    fn erased_store_reads() {
        let mut store = HashMap::new();
        let _ = store.insert(Dual::new("a", "b"), ErasedTuple::from(Dual::new(10i32, "v")));

        let key = Dual::new("a", "b");
        assert_eq!(store.try_get::<i32>(&key, 0), Ok(Some(&10)));
        assert_eq!(store.try_get::<&str>(&key, 1), Ok(Some(&"v")));
        assert_eq!(store.try_get::<i32>(&Dual::new("b", "a"), 0), Ok(None));
        assert_eq!(
            store.try_get::<i32>(&key, 2),
            Err(Error::OutOfBounds {
                index: 2,
                length: 2
            })
        );
    }

    #[test]
    fn debug_lists_elements() {
        let erased = ErasedTuple::from(Dual::new(1, "x"));
        assert_eq!(format!("{:?}", erased), r#"ErasedTuple(1, "x")"#);
    }
}
