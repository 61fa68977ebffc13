use polytuple::{lookup::Traced, prelude::*};
use std::{
    collections::BTreeMap,
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt;

/// A writer appending everything it is given to a shared buffer.
#[derive(Debug, Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn traced_store_answers_like_its_inner_store() {
    let _ = fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let mut inner = BTreeMap::new();
    let _ = inner.insert(Dual::new("a", 1), Triple::new(1.5f64, "x", 'q'));
    let store = Traced::new("prices", inner.clone());

    assert_eq!(store.name(), "prices");
    assert_eq!(store.get_first_of("a", 1), Some(&1.5));
    assert_eq!(store.get_third_of("a", 1), inner.get_third_of("a", 1));
    assert_eq!(store.get_second_of("a", 2), None);
    assert!(store.contains_key_of("a", 1));
    assert!(!store.contains_key_of("b", 1));
    assert_eq!(store.into_inner(), inner);
}

#[test]
fn traced_wraps_borrowed_stores() {
    let mut inner = BTreeMap::new();
    let _ = inner.insert(3u8, Single::new("three"));
    let store = Traced::new("numbers", &inner);

    assert_eq!(store.get_first(&3), Some(&"three"));
    assert_eq!(store.get_ref().len(), 1);
}

#[test]
fn traced_store_emits_an_event_per_lookup() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut inner = BTreeMap::new();
    let _ = inner.insert(Dual::new(1u8, 2u8), Single::new('x'));
    let store = Traced::new("pairs", inner);

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(store.get_first_of(1, 2), Some(&'x'));
        assert!(!store.contains_key_of(2, 1));
    });

    let output = captured.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2, "{}", output);
    assert!(lines[0].contains("retrieve"), "{}", output);
    assert!(lines[0].contains(r#"store="pairs""#), "{}", output);
    assert!(lines[0].contains("key=Dual(1, 2)"), "{}", output);
    assert!(lines[0].contains("hit=true"), "{}", output);
    assert!(lines[1].contains("contains_key"), "{}", output);
    assert!(lines[1].contains("key=Dual(2, 1)"), "{}", output);
    assert!(lines[1].contains("hit=false"), "{}", output);
}
