//! The tuple variants themselves, and conversions back and forth between them and the standard
//! library's tuples.
//!
//! There is one distinct type per arity, from [`Unit`] (no elements) through [`Hepta`] (seven
//! elements). Each variant stores its elements as plain owned values, hands them out through named
//! accessors (`first()` through `seventh()`) and through [`Get`](crate::index::Get), and never
//! changes after construction: there are no setters and no public fields.
//!
//! Two tuples are equal exactly when their elements are pairwise equal; tuples of different
//! arities are different types, so they can never compare equal. Hashing feeds the arity into the
//! hasher before the elements, so that equal tuples hash equally and an empty tuple is not
//! confused with no hashing at all.
//!
//! # Examples
//!
//! ```
//! use polytuple::{create, tuple, Triple, Tuple};
//!
//! let a = create((1, "x", true));
//! let b = Triple::new(1, "x", true);
//! let c = tuple!(1, "x", true);
//!
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! assert_eq!(a.length(), 3);
//! assert_eq!(a.first(), &1);
//! assert_eq!(a.second(), &"x");
//! assert_eq!(a.third(), &true);
//! ```

use crate::index::{Get, Index};

/// Operations common to every tuple variant.
///
/// This trait is implemented for [`Unit`], [`Single`], [`Dual`], [`Triple`], [`Quad`], [`Penta`],
/// [`Hexa`], and [`Hepta`], and cannot be implemented outside this crate.
pub trait Tuple: sealed::Tuple + Sized {
    /// The number of elements in this tuple.
    const LENGTH: usize;

    /// The standard library tuple with the same elements, in the same order.
    type AsNative: Native<AsTuple = Self>;

    /// The number of elements in this tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use polytuple::{Dual, Tuple, UNIT};
    ///
    /// assert_eq!(UNIT.length(), 0);
    /// assert_eq!(Dual::new('a', 'b').length(), 2);
    /// ```
    fn length(&self) -> usize {
        Self::LENGTH
    }

    /// The names of the element types of this tuple, in order.
    ///
    /// These are produced by [`std::any::type_name`], and so carry the same caveats: they are
    /// meant for diagnostics, not for identifying types.
    fn type_names() -> Vec<&'static str>;

    /// Borrow the element at the type-level position `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polytuple::{index::*, Quad, Tuple};
    ///
    /// let quad = Quad::new(1u8, 2u16, 3u32, 4u64);
    /// assert_eq!(quad.at::<_2>(), &3u32);
    /// ```
    fn at<N: Index>(&self) -> &<Self as Get<N>>::Output
    where
        Self: Get<N>,
    {
        <Self as Get<N>>::get(self)
    }

    /// Convert this tuple into the standard library tuple with the same elements.
    fn into_native(self) -> Self::AsNative;
}

/// Convert a standard library tuple of up to seven elements into its corresponding variant.
pub trait Native: sealed::Native + Sized {
    /// The corresponding tuple variant.
    type AsTuple: Tuple<AsNative = Self>;

    /// Convert this standard library tuple into its corresponding variant.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Construct the tuple variant whose arity matches the given standard library tuple.
///
/// The arity is fixed by the argument's type, so there is nothing to check at runtime.
///
/// # Examples
///
/// ```
/// use polytuple::{create, Single, Unit};
///
/// let unit: Unit = create(());
/// let single: Single<&str> = create(("only",));
/// assert_eq!(single.first(), &"only");
/// # let _ = unit;
/// ```
pub fn create<T: Native>(values: T) -> T::AsTuple {
    values.into_tuple()
}

/// The one and only tuple of no elements.
///
/// Every [`Unit`] is equal to every other; this constant is simply the canonical way to refer to
/// one. A `Unit` is a value like any other tuple and is never used to mean "absent".
pub const UNIT: Unit = Unit;

polytuple_macro::impl_variants!(Unit, Single, Dual, Triple, Quad, Penta, Hexa, Hepta);

pub(crate) mod sealed {
    pub trait Tuple {}
    pub trait Native {}
}
