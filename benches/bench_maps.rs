use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;
const BUCKET_COUNT: usize = 64;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.get(key));
            }
        })
    });
}

macro_rules! map_benches {
    ($($module_name:ident: $type_name:ident => $constructor:expr,)*) => {
        $(
            mod $module_name {
                use splay_collections::$module_name::$type_name;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                fn new_map() -> $type_name<u32, u32> {
                    $constructor
                }

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut map = new_map();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.next_u32();
                            let val = rng.next_u32();

                            black_box(map.insert(key, val).is_ok());
                        }
                    }));
                }

                pub fn bench_peek(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = new_map();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        let val = rng.next_u32();

                        if map.insert(key, val).is_ok() {
                            values.push(key);
                        }
                    }

                    c.bench_function(&format!("bench {} peek", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &values {
                            black_box(map.peek(key).is_ok());
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreemap_get,
            bench_btreemap_insert,
            $(
                $module_name::bench_peek,
                $module_name::bench_insert,
            )*
        );
    }
}

map_benches!(
    splay_tree: SplayTree => SplayTree::new(),
    chained_hash_table: ChainedHashTable => ChainedHashTable::with_bucket_count(super::BUCKET_COUNT),
    probing_hash_table: ProbingHashTable => ProbingHashTable::with_bucket_count(super::BUCKET_COUNT),
);

criterion_main!(benches);
