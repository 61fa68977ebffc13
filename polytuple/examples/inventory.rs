use polytuple::{lookup::Traced, prelude::*, ErasedTuple, ErasedValues};
use std::{collections::HashMap, error::Error};

/// A product: its name, its price in cents, and whether it is discontinued.
type Product = Triple<String, u64, bool>;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut products: HashMap<Dual<String, String>, Product> = HashMap::new();
    let _ = products.insert(
        Dual::new("KT-1".to_string(), "Berlin".to_string()),
        Triple::new("Kettle".to_string(), 2499, false),
    );
    let _ = products.insert(
        Dual::new("TP-2".to_string(), "Berlin".to_string()),
        Triple::new("Teapot".to_string(), 3150, true),
    );
    let products = Traced::new("products", products);

    for sku in &["KT-1", "TP-2", "XX-0"] {
        println!("{}: {}", sku, price_tag(&products, sku, "Berlin"));
    }

    // The same record, with its types only checked when it is read.
    let erased: HashMap<&str, ErasedTuple> = vec![(
        "KT-1",
        ErasedTuple::from(Triple::new("Kettle".to_string(), 2499u64, false)),
    )]
    .into_iter()
    .collect();
    let price = erased.try_get::<u64>(&"KT-1", 1)?;
    println!("erased KT-1 price: {:?}", price);
    if let Err(error) = erased.try_get::<u32>(&"KT-1", 1) {
        println!("erased KT-1 as u32: {}", error);
    }
    Ok(())
}

/// Only the name and the price are needed, so only those are required of the store.
fn price_tag<S>(store: &S, sku: &str, region: &str) -> String
where
    S: Keys2Values2<String, String, String, u64>,
{
    let (sku, region) = (sku.to_string(), region.to_string());
    match (
        store.get_first_of(sku.clone(), region.clone()),
        store.get_second_of(sku, region),
    ) {
        (Some(name), Some(cents)) => format!("{} at ${}.{:02}", name, cents / 100, cents % 100),
        _ => "not stocked".to_string(),
    }
}
