//! Benchmarks for big integer multiplication.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use limbint::arith::mul::{karatsuba_mul, schoolbook_mul};
use limbint::arith::pol_utils::pol_widen;
use limbint::utils::random_big_integer;

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_integer_mul");
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    for digits in [64, 256, 1024, 4096, 16384] {
        let a = random_big_integer(&mut rng, digits, true);
        let b = random_big_integer(&mut rng, digits, true);
        group.bench_with_input(BenchmarkId::new("operator", digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
    }

    group.finish();
}

fn bench_karatsuba_vs_schoolbook(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_limb_mul");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for limbs in [16, 32, 64, 128, 512] {
        let a = pol_widen(random_big_integer(&mut rng, limbs * 4, false).digits());
        let b = pol_widen(random_big_integer(&mut rng, limbs * 4, false).digits());
        group.bench_with_input(BenchmarkId::new("karatsuba", limbs), &limbs, |bench, _| {
            bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("schoolbook", limbs), &limbs, |bench, _| {
            bench.iter(|| schoolbook_mul(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiplication, bench_karatsuba_vs_schoolbook);
criterion_main!(benches);
