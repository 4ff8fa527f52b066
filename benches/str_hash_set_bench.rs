use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hashbrown::HashSet;
use std::time::Duration;
use str_hashset::StrHashSet;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
    c.bench_function("str_hash_set_insert_10k", |b| {
        b.iter_batched(
            || StrHashSet::with_capacity(11),
            |mut s| {
                for k in &keys {
                    s.insert(k);
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("hashbrown_insert_10k", |b| {
        b.iter_batched(
            HashSet::<String>::new,
            |mut s| {
                for k in &keys {
                    s.insert(k.clone());
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit(c: &mut Criterion) {
    c.bench_function("str_hash_set_find_hit", |b| {
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        let s: StrHashSet = keys.iter().collect();
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(s.find(k).unwrap());
        })
    });
}

fn bench_find_miss(c: &mut Criterion) {
    c.bench_function("str_hash_set_find_miss", |b| {
        let s: StrHashSet = lcg(11).take(10_000).map(key).collect();
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in set
            let k = key(miss.next().unwrap());
            black_box(s.find(&k));
        })
    });
}

fn bench_iterate(c: &mut Criterion) {
    c.bench_function("str_hash_set_iter_10k", |b| {
        let s: StrHashSet = lcg(3).take(10_000).map(key).collect();
        b.iter(|| black_box(s.iter().map(|e| e.key().len()).sum::<usize>()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_find_hit, bench_find_miss, bench_iterate
}
criterion_main!(benches);
