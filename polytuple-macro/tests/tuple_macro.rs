use polytuple::{index::*, *};
use static_assertions::assert_type_eq_all;

type Pair = <(u8, char) as Native>::AsTuple;
type Seven = <(u8, u8, u8, u8, u8, u8, u8) as Native>::AsTuple;

assert_type_eq_all!(Pair, Dual<u8, char>);
assert_type_eq_all!(Seven, Hepta<u8, u8, u8, u8, u8, u8, u8>);
assert_type_eq_all!(<() as Native>::AsTuple, Unit);
assert_type_eq_all!(<Triple<u8, u16, u32> as Get<_2>>::Output, u32);
assert_type_eq_all!(_3, S<S<S<Z>>>);

#[test]
fn arity_follows_argument_count() {
    let unit: Unit = tuple!();
    let single: Single<i32> = tuple!(1);
    let dual: Dual<i32, &str> = tuple!(1, "x");
    let hepta: Hepta<u8, u8, u8, u8, u8, u8, char> = tuple!(1, 2, 3, 4, 5, 6, 'g');

    assert_eq!(unit, UNIT);
    assert_eq!(single.length(), 1);
    assert_eq!(dual.length(), 2);
    assert_eq!(hepta.seventh(), &'g');
}

#[test]
fn trailing_comma_and_expressions() {
    let base = 20;
    let triple = tuple!(base + 1, format!("{}!", base), base > 10,);
    assert_eq!(triple, Triple::new(21, "20!".to_string(), true));
}

#[test]
fn nested_invocations() {
    let nested = tuple!(tuple!('a', 'b'), tuple!(), 3u8);
    assert_eq!(nested.first().second(), &'b');
    assert_eq!(nested.second(), &UNIT);
    assert_eq!(nested, create((create(('a', 'b')), Unit::new(), 3)));
}

#[test]
fn index_values() {
    assert_eq!(<_0>::VALUE, 0);
    assert_eq!(<_5>::VALUE, 5);
}
