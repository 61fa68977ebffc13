/*!
> **polytuple (crate):** Fixed-arity heterogeneous tuples, and typed accessors for the stores that
> hold them.

A map from keys to records is one of the most common shapes of data in any program, and one of
the least precisely typed: code that only needs the first two fields of each record usually ends
up depending on the whole record type, or on a bespoke struct, or on a stringly-typed row.

This crate gives each record shape a name and each access pattern a bound:

- **Tuple variants** [`Unit`], [`Single`], [`Dual`], [`Triple`], [`Quad`], [`Penta`], [`Hexa`],
  and [`Hepta`] hold zero to seven elements of arbitrary, independent types. They are immutable
  values with structural equality, ordering and hashing, and can be nested inside one another.
- **Value capabilities** [`Values1`] through [`Values7`] describe any key-value store whose values
  have *at least* some leading element types, and give it typed getters
  ([`get_first`](Values1::get_first) .. [`get_seventh`](Values7::get_seventh)). Code bounded by
  `Values2<K, A, B>` works with any store whose values start with an `A` and a `B`, however long
  they are.
- **Composite keys** are handled by [`Keys2`], for stores keyed by a [`Dual<K1, K2>`](Dual), along
  with [`keys2::Values1`] through [`keys2::Values7`], which accept the two key parts directly.

None of these capabilities own any data: they read through the [`Lookup`] trait, which is already
implemented for [`HashMap`](std::collections::HashMap) and
[`BTreeMap`](std::collections::BTreeMap), and which any other store can implement with one method.

When the element types of a record are only known at runtime, an [`ErasedTuple`] holds them
instead, checking each element's type as it is read back (see the [`erased`] module).

## What now?

- If you'd like a **guided walk through the crate**, start with the **[tutorial]**.
- If you already know what you want, the **[quick reference](#quick-reference)** below lists
  every operation, and the [`prelude`] imports all of them at once.

## Quick reference

| Operation | Spelling | Result |
| :-------- | :------- | :----- |
| Construct from elements | [`Triple::new(a, b, c)`](Triple::new), [`tuple!(a, b, c)`](tuple!) | `Triple<A, B, C>` |
| Construct from a std tuple | [`create((a, b, c))`](create), [`(a, b, c).into()`](Native::into_tuple) | `Triple<A, B, C>` |
| Read an element | [`t.first()`](Triple::first) .. [`t.seventh()`](Hepta::seventh), [`t.at::<_2>()`](Tuple::at) | `&A` |
| Count the elements | [`t.length()`](Tuple::length), [`Triple::<A, B, C>::LENGTH`](Tuple::LENGTH) | `usize` |
| Read a value's element | [`store.get_first(&key)`](Values1::get_first) .. [`get_seventh`](Values7::get_seventh) | `Option<&A>` |
| Build a composite key | [`store.get_key(k1, k2)`](Keys2::get_key) | `Dual<K1, K2>` |
| Read by composite key | [`store.get_first_of(k1, k2)`](keys2::Values1::get_first_of) .. [`get_seventh_of`](keys2::Values7::get_seventh_of) | `Option<&A>` |
| Erase element types | [`ErasedTuple::from(t)`](ErasedTuple) | `ErasedTuple` |
| Read an erased element | [`erased.get::<A>(0)`](ErasedTuple::get), [`store.try_get::<A>(&key, 0)`](ErasedValues::try_get) | `Result<&A, Error>`, `Result<Option<&A>, Error>` |
| Restore element types | [`Triple::<A, B, C>::try_from(erased)`](ErasedTuple) | `Result<Triple<A, B, C>, Error>` |

A key that is not in the store is never an error: every store getter returns `None` for it.

## Features

- **`tracing`**: adds `lookup::Traced`, a store adapter which emits a [`tracing`] event for
  every lookup.
- **`quickcheck`**: implements `quickcheck::Arbitrary` for every tuple variant.

[`tracing`]: https://docs.rs/tracing
*/

#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// The `tuple!` macro names this crate as `polytuple`, which the unit tests invoke from inside it.
#[cfg(test)]
extern crate self as polytuple;

pub mod erased;
pub mod index;
pub mod keys2;
pub mod lookup;
pub mod tutorial;

mod error;
mod tuple;
mod values;

pub use erased::{ErasedTuple, ErasedValues};
pub use error::Error;
pub use keys2::Keys2;
pub use lookup::Lookup;
pub use polytuple_macro::tuple;
pub use tuple::{
    create, Dual, Hepta, Hexa, Native, Penta, Quad, Single, Triple, Tuple, Unit, UNIT,
};
pub use values::{Values1, Values2, Values3, Values4, Values5, Values6, Values7};

/// The prelude module for quickly getting started with polytuple.
///
/// This module is designed to be imported as `use polytuple::prelude::*;`, which brings into scope
/// every tuple variant and every capability trait. The composite-key capabilities are renamed
/// `Keys2Values1` .. `Keys2Values7` so that they can sit alongside [`Values1`] .. [`Values7`].
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::index::{Get, _0, _1, _2, _3, _4, _5, _6};
    #[doc(no_inline)]
    pub use crate::keys2::{
        Values1 as Keys2Values1, Values2 as Keys2Values2, Values3 as Keys2Values3,
        Values4 as Keys2Values4, Values5 as Keys2Values5, Values6 as Keys2Values6,
        Values7 as Keys2Values7,
    };
    #[doc(no_inline)]
    pub use polytuple_macro::tuple;
    #[doc(no_inline)]
    pub use crate::{
        create, Dual, ErasedTuple, ErasedValues, Hepta, Hexa, Keys2, Lookup, Native, Penta,
        Quad, Single, Triple, Tuple, Unit, Values1, Values2, Values3, Values4, Values5, Values6,
        Values7, UNIT,
    };
}

#[cfg(test)]
mod capabilities {
    include!(concat!(env!("OUT_DIR"), "/capabilities.rs"));
}
