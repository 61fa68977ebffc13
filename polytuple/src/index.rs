//! Type-level positions within a tuple, represented by zero [`Z`] and successor [`S`].
//!
//! A tuple of arity `n` implements [`Get<N>`](Get) exactly for the indices `N` below `n`, so asking
//! for a position past the end of a tuple is a type error rather than a runtime failure.

/// The position zero.
///
/// # Examples
///
/// ```
/// use polytuple::index::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The position after `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use polytuple::index::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// All type-level positions can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// use polytuple::index::*;
///
/// assert_eq!(<_0>::VALUE, 0);
/// assert_eq!(<_1>::VALUE, 1);
/// assert_eq!(<_6>::VALUE, 6);
/// ```
pub trait Index: sealed::Index + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level position, as a `usize`.
    const VALUE: usize;
}

impl Index for Z {
    const VALUE: usize = 0;
}

impl<N: Index> Index for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Borrow the element at position `N` of a tuple.
///
/// This is implemented by every tuple variant for each position it actually has, and by nothing
/// else.
///
/// # Examples
///
/// ```
/// use polytuple::{index::*, Triple};
///
/// let triple = Triple::new(1, "x", true);
/// assert_eq!(<Triple<_, _, _> as Get<_1>>::get(&triple), &"x");
/// ```
///
/// A `Dual` has no third element, so this does not compile:
///
/// ```compile_fail
/// use polytuple::{index::*, Dual};
///
/// let dual = Dual::new(1, "x");
/// let _ = <Dual<_, _> as Get<_2>>::get(&dual);
/// ```
pub trait Get<N: Index> {
    /// The type of the element at position `N`.
    type Output;

    /// Borrow the element at position `N`.
    fn get(&self) -> &Self::Output;
}

polytuple_macro::generate_index_aliases!(7);

mod sealed {
    use super::*;
    pub trait Index: 'static {}
    impl Index for Z {}
    impl<N: Index> Index for S<N> {}
}
