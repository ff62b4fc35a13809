
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use utf8conv::{utf16_to_utf8, utf8_to_utf16};

const LOREM: [&str; 8] = [
    "Lorem ipsum dolor sit amet, consectetuer adipiscing elit.",
    "Maecenas porttitor congue massa. Fusce posuere, magna sed",
    "pulvinar ultricies, purus lectus malesuada libero,",
    "sit amet commodo magna eros quis urna.",
    "Nunc viverra imperdiet enim. Fusce est. Vivamus a tellus.",
    "Pellentesque habitant morbi tristique senectus et netus et",
    "malesuada fames ac turpis egestas. Proin pharetra nonummy pede.",
    "Mauris et orci.",
];

const REPEAT_COUNT: usize = 2_000;

static STRINGS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut strings = Vec::with_capacity(LOREM.len() * REPEAT_COUNT);
    for i in 0..REPEAT_COUNT {
        for line in LOREM {
            strings.push(format!("{line} (#{i})"));
        }
    }
    strings.shuffle(&mut ChaCha8Rng::seed_from_u64(1995));
    strings
});

static WIDE_STRINGS: Lazy<Vec<Vec<u16>>> =
    Lazy::new(|| STRINGS.iter().map(|s| s.encode_utf16().collect()).collect());

fn bench_utf16_to_utf8(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf16_to_utf8");

    group.bench_function("codec", |b| {
        b.iter(|| {
            for s in WIDE_STRINGS.iter() {
                black_box(utf16_to_utf8(black_box(s)).unwrap());
            }
        })
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            for s in WIDE_STRINGS.iter() {
                black_box(String::from_utf16(black_box(s)).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_utf8_to_utf16(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_to_utf16");

    group.bench_function("codec", |b| {
        b.iter(|| {
            for s in STRINGS.iter() {
                black_box(utf8_to_utf16(black_box(s.as_bytes())).unwrap());
            }
        })
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            for s in STRINGS.iter() {
                let s = std::str::from_utf8(black_box(s.as_bytes())).unwrap();
                black_box(s.encode_utf16().collect::<Vec<u16>>());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_utf16_to_utf8, bench_utf8_to_utf16);
criterion_main!(benches);
