use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

const VARIANTS: [&str; 8] = [
    "Unit", "Single", "Dual", "Triple", "Quad", "Penta", "Hexa", "Hepta",
];

const ELEMENTS: [&str; 7] = ["u8", "u16", "u32", "u64", "i8", "i16", "i32"];

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate assertions for every pairing of value arity and capability width, so that a
    // mistake in any one of the blanket implementations is caught.

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("capabilities.rs");
    let mut f = File::create(&dest_path)?;

    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(f, "use static_assertions::{{assert_impl_all, assert_not_impl_any}};")?;
    writeln!(f, "use std::collections::HashMap;")?;
    writeln!(f)?;

    for arity in 0..VARIANTS.len() {
        let value = Value(arity);
        for width in 1..=ELEMENTS.len() {
            let plain = Capability::Plain(width);
            let composite = Capability::Composite(width);
            if width <= arity {
                writeln!(f, "assert_impl_all!(HashMap<u8, {}>: {});", value, plain)?;
                writeln!(
                    f,
                    "assert_impl_all!(HashMap<Dual<u8, char>, {}>: {});",
                    value, composite
                )?;
            } else {
                writeln!(f, "assert_not_impl_any!(HashMap<u8, {}>: {});", value, plain)?;
                writeln!(
                    f,
                    "assert_not_impl_any!(HashMap<Dual<u8, char>, {}>: {});",
                    value, composite
                )?;
            }
        }
    }

    // A capability naming the wrong type for any position is never satisfied.
    writeln!(
        f,
        "assert_not_impl_any!(HashMap<u8, {}>: Values1<u8, bool>);",
        Value(ELEMENTS.len())
    )?;
    writeln!(
        f,
        "assert_not_impl_any!(HashMap<u8, {}>: Values2<u8, u8, bool>);",
        Value(ELEMENTS.len())
    )?;
    Ok(())
}

/// The tuple variant of the given arity, filled with distinct element types.
#[derive(Clone, Copy, Debug)]
struct Value(usize);

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Value(arity) = *self;
        write!(f, "{}", VARIANTS[arity])?;
        if arity > 0 {
            write!(f, "<{}>", ELEMENTS[..arity].join(", "))?;
        }
        Ok(())
    }
}

/// A capability over the first `n` element types.
#[derive(Clone, Copy, Debug)]
enum Capability {
    Plain(usize),
    Composite(usize),
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        use Capability::*;
        match *self {
            Plain(n) => write!(f, "Values{}<u8, {}>", n, ELEMENTS[..n].join(", ")),
            Composite(n) => write!(
                f,
                "Keys2Values{}<u8, char, {}>",
                n,
                ELEMENTS[..n].join(", ")
            ),
        }
    }
}
