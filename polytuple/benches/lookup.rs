use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion,
};
use polytuple::{prelude::*, ErasedTuple, ErasedValues};
use polytuple_null as null;
use std::collections::{BTreeMap, HashMap};

type Key = Dual<u32, u32>;
type Record = Triple<u64, String, bool>;

const COUNT: u32 = 1024;

fn records() -> impl Iterator<Item = (Key, Record)> {
    (0..COUNT).map(|i| {
        (
            Dual::new(i, i.wrapping_mul(7)),
            Triple::new(u64::from(i), i.to_string(), i % 2 == 0),
        )
    })
}

fn bench_store<S>(g: &mut BenchmarkGroup<WallTime>, store: &S)
where
    S: Keys2Values1<u32, u32, u64> + Lookup<Value = Record>,
{
    g.bench_function("get_first_of", |b| {
        b.iter(|| {
            for i in 0..COUNT {
                let _ = black_box(store.get_first_of(black_box(i), i.wrapping_mul(7)));
            }
        })
    });
    g.bench_function("manual", |b| {
        b.iter(|| {
            for i in 0..COUNT {
                let key = Dual::new(black_box(i), i.wrapping_mul(7));
                let _ = black_box(store.retrieve(&key).map(|record| record.first()));
            }
        })
    });
}

fn bench_all_on<S>(c: &mut Criterion, store_name: &str, store: S)
where
    S: Keys2Values1<u32, u32, u64> + Lookup<Value = Record>,
{
    let mut g = c.benchmark_group(store_name);
    bench_store(&mut g, &store);
    g.finish();
}

fn bench_hash_map(c: &mut Criterion) {
    bench_all_on(c, "hash_map", records().collect::<HashMap<_, _>>())
}

fn bench_btree_map(c: &mut Criterion) {
    bench_all_on(c, "btree_map", records().collect::<BTreeMap<_, _>>())
}

fn bench_null(c: &mut Criterion) {
    bench_all_on(c, "null", null::store::<Key, Record>())
}

fn bench_erased(c: &mut Criterion) {
    let store: HashMap<Key, ErasedTuple> = records()
        .map(|(key, record)| (key, ErasedTuple::from(record)))
        .collect();
    let mut g = c.benchmark_group("erased");
    g.bench_function("try_get", |b| {
        b.iter(|| {
            for i in 0..COUNT {
                let key = Dual::new(black_box(i), i.wrapping_mul(7));
                let _ = black_box(store.try_get::<u64>(&key, 0));
            }
        })
    });
    g.finish();
}

criterion_group!(benches, bench_hash_map, bench_btree_map, bench_null, bench_erased);
criterion_main!(benches);
