/*! The introductory tutorial for polytuple (nothing is exported from this module).

# Getting started with polytuple

The first step is to give a record a shape. Suppose we keep an inventory of products, keyed by
SKU, and each product has a name, a price in cents, and a count in stock:

```
use polytuple::prelude::*;

let kettle: Triple<String, u64, u32> = Triple::new("Kettle".to_string(), 2499, 12);
```

A [`Triple`] is a tuple of exactly three elements. There is one such type for every number of
elements from zero to seven: [`Unit`], [`Single`], [`Dual`], [`Triple`], [`Quad`], [`Penta`],
[`Hexa`], and [`Hepta`]. The same value can be built three other ways, all equivalent:

```
# use polytuple::prelude::*;
let a = Triple::new("Kettle".to_string(), 2499u64, 12u32);
let b = create(("Kettle".to_string(), 2499u64, 12u32));
let c = tuple!("Kettle".to_string(), 2499u64, 12u32);
let d: Triple<_, _, _> = ("Kettle".to_string(), 2499u64, 12u32).into();

assert!(a == b && b == c && c == d);
```

Elements are read back by position, through the accessors `first()` to `seventh()`, or through
[`Tuple::at`] with a type-level index. Only the positions a tuple actually has exist, so asking a
`Triple` for its fourth element is a compile error, not a runtime one:

```
# use polytuple::prelude::*;
let kettle = Triple::new("Kettle", 2499u64, 12u32);
assert_eq!(kettle.first(), &"Kettle");
assert_eq!(kettle.at::<_1>(), &2499);
assert_eq!(kettle.length(), 3);
```

```compile_fail
# use polytuple::prelude::*;
let kettle = Triple::new("Kettle", 2499u64, 12u32);
kettle.fourth();
```

Tuples never change once built, and compare, order and hash by their elements. They can be
nested, and their elements can be anything, including `Option`s, which are ordinary values like
any other:

```
# use polytuple::prelude::*;
let outer = Dual::new(Single::new('x'), None::<u8>);
assert_eq!(outer.first().first(), &'x');
assert_eq!(outer.second(), &None);
```

# Reading from a store

A store is anything implementing [`Lookup`]. The standard library's `HashMap` and `BTreeMap`
already do, so a map of SKUs to products is a store as it stands:

```
# use polytuple::prelude::*;
use std::collections::HashMap;

let mut inventory = HashMap::new();
inventory.insert("KT-1", Triple::new("Kettle".to_string(), 2499u64, 12u32));

assert_eq!(inventory.get_second(&"KT-1"), Some(&2499));
assert_eq!(inventory.get_third(&"KT-1"), Some(&12));
assert_eq!(inventory.get_first(&"missing"), None);
```

These getters come from the capabilities [`Values1`] through [`Values7`]. Their real use is as
bounds: a function which only reads names and prices says so, and works with any store whose
values begin with a name and a price, whatever comes after:

```
# use polytuple::prelude::*;
use std::collections::{BTreeMap, HashMap};

fn price_tag<S: Values2<&'static str, String, u64>>(store: &S, sku: &'static str) -> Option<String> {
    let name = store.get_first(&sku)?;
    let cents = store.get_second(&sku)?;
    Some(format!("{}: ${}.{:02}", name, cents / 100, cents % 100))
}

let mut inventory = HashMap::new();
inventory.insert("KT-1", Triple::new("Kettle".to_string(), 2499u64, 12u32));

let mut catalogue = BTreeMap::new();
catalogue.insert("KT-1", Dual::new("Kettle".to_string(), 2499u64));

assert_eq!(price_tag(&inventory, "KT-1").as_deref(), Some("Kettle: $24.99"));
assert_eq!(price_tag(&catalogue, "KT-1"), price_tag(&inventory, "KT-1"));
assert_eq!(price_tag(&catalogue, "XX-0"), None);
```

A missing key is never an error: every getter answers `None` for it.

# Composite keys

When a store is keyed by a pair of values, key it by a [`Dual`], and the [`Keys2`] capability lets
you pass the two parts separately. The composite-key capabilities, imported by the prelude as
`Keys2Values1` to `Keys2Values7`, mirror the getters above with an `_of` suffix:

```
# use polytuple::prelude::*;
use std::collections::HashMap;

let mut stock = HashMap::new();
stock.insert(Dual::new("KT-1", "Berlin"), Dual::new(12u32, 'A'));

assert_eq!(stock.get_first_of("KT-1", "Berlin"), Some(&12));
assert!(stock.contains_key_of("KT-1", "Berlin"));
assert!(!stock.contains_key_of("Berlin", "KT-1"));
```

The order of the parts matters: `("KT-1", "Berlin")` and `("Berlin", "KT-1")` are different keys.

# When types are only known at runtime

Sometimes the element types of a record are not known until the program runs. An
[`ErasedTuple`] holds the same elements with their types hidden, and checks the requested type
whenever one is read:

```
# use polytuple::prelude::*;
use polytuple::Error;
use std::convert::TryFrom;

let erased = ErasedTuple::from(Dual::new("Kettle", 2499u64));
assert_eq!(erased.second::<u64>(), Ok(&2499));
assert!(matches!(erased.second::<u32>(), Err(Error::TypeMismatch { .. })));

let typed = Dual::<&str, u64>::try_from(erased).unwrap();
assert_eq!(typed, Dual::new("Kettle", 2499));
```

That's everything: tuples to hold records, stores to hold tuples, and capabilities to say exactly
which part of a store some code needs.
*/

// Import the whole crate so the docs above can link appropriately.
#![allow(unused_imports)]
use crate::prelude::*;
