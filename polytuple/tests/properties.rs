use {
    polytuple::{prelude::*, ErasedTuple},
    quickcheck::{Gen, QuickCheck, TestResult},
    std::{
        collections::{hash_map::DefaultHasher, HashMap},
        hash::{Hash, Hasher},
    },
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn equal_tuples_hash_equally_property(
    a: Penta<u8, bool, String, Option<i16>, char>,
    b: Penta<u8, bool, String, Option<i16>, char>,
) -> TestResult {
    let clone = a.clone();
    if a != clone || hash_of(&a) != hash_of(&clone) {
        return TestResult::error(format!("{:?} differs from its own clone", a));
    }
    // Any differing element, including the ones past the fourth, breaks equality.
    let elementwise = a.first() == b.first()
        && a.second() == b.second()
        && a.third() == b.third()
        && a.fourth() == b.fourth()
        && a.fifth() == b.fifth();
    if (a == b) != elementwise {
        return TestResult::failed();
    }
    TestResult::from_bool(a != b || hash_of(&a) == hash_of(&b))
}

#[test]
fn equal_tuples_hash_equally() {
    QuickCheck::new()
        .gen(Gen::new(4))
        .quickcheck(equal_tuples_hash_equally_property as fn(_, _) -> TestResult)
}

fn erased_hash_matches_typed_property(tuple: Hexa<u8, u16, String, bool, char, Vec<u8>>) -> bool {
    let erased = ErasedTuple::from(tuple.clone());
    hash_of(&erased) == hash_of(&tuple) && erased == ErasedTuple::from(tuple)
}

#[test]
fn erased_hash_matches_typed() {
    QuickCheck::new()
        .gen(Gen::new(13))
        .quickcheck(erased_hash_matches_typed_property as fn(_) -> bool)
}

fn accessors_return_constructed_values_property(
    a: i32,
    b: String,
    c: bool,
    d: Option<u8>,
    e: char,
    f: u64,
    g: (),
) -> bool {
    let hepta = create((a, b.clone(), c, d, e, f, g));
    hepta.first() == &a
        && hepta.second() == &b
        && hepta.third() == &c
        && hepta.fourth() == &d
        && hepta.fifth() == &e
        && hepta.sixth() == &f
        && hepta.seventh() == &g
        && hepta.into_native() == (a, b, c, d, e, f, g)
}

#[test]
fn accessors_return_constructed_values() {
    QuickCheck::new().quickcheck(
        accessors_return_constructed_values_property as fn(_, _, _, _, _, _, _) -> bool,
    )
}

fn composite_keys_property(k1: u16, k2: u16) -> bool {
    let store: HashMap<Dual<u16, u16>, Single<()>> = HashMap::new();
    let forward = store.get_key(k1, k2);
    forward == store.get_key(k1, k2) && ((k1 == k2) == (forward == store.get_key(k2, k1)))
}

#[test]
fn composite_keys_are_deterministic_and_ordered() {
    QuickCheck::new().quickcheck(composite_keys_property as fn(_, _) -> bool)
}

fn store_round_trip_property(entries: Vec<(u8, u8, i64, String)>, probe: (u8, u8)) -> bool {
    let mut store = HashMap::new();
    for (k1, k2, a, b) in entries.iter().cloned() {
        let _ = store.insert(Dual::new(k1, k2), Dual::new(a, b));
    }

    let (k1, k2) = probe;
    let expected = store.get(&Dual::new(k1, k2)).cloned();
    let first = store.get_first_of(k1, k2).cloned();
    let second = store.get_second_of(k1, k2).cloned();

    // Repeated reads on an unchanged store agree with each other.
    first == store.get_first_of(k1, k2).cloned()
        && first == expected.as_ref().map(|value| *value.first())
        && second == expected.map(|value| value.second().clone())
        && store.contains_key_of(k1, k2) == first.is_some()
}

#[test]
fn store_round_trip() {
    QuickCheck::new()
        .gen(Gen::new(8))
        .quickcheck(store_round_trip_property as fn(_, _) -> bool)
}
