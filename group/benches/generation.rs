use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use group::{
    is_probable_prime, DomainParameterGenerator, DsaGenerator, MillerRabin, ParameterSet,
    DEFAULT_ROUNDS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("generate");
    bench_group.sample_size(10);
    for (len_p, len_q) in [(64u64, 32u64), (128, 64), (256, 160)] {
        bench_group.bench_with_input(
            BenchmarkId::new("direct", format!("{len_p}/{len_q}")),
            &(len_p, len_q),
            |bencher, &(len_p, len_q)| {
                let mut generator =
                    DomainParameterGenerator::new(MillerRabin::new(StdRng::seed_from_u64(42)));
                bencher.iter(|| black_box(generator.generate(len_p, len_q).expect("generate")))
            },
        );
        bench_group.bench_with_input(
            BenchmarkId::new("dsa", format!("{len_p}/{len_q}")),
            &(len_p, len_q),
            |bencher, &(len_p, len_q)| {
                let mut generator =
                    DsaGenerator::new(MillerRabin::new(StdRng::seed_from_u64(42)), len_p, len_q)
                        .expect("sizes");
                bencher.iter(|| black_box(generator.generate().expect("generate")))
            },
        );
    }
    bench_group.finish();
}

fn bench_certify(c: &mut Criterion) {
    let primes = MillerRabin::new(StdRng::seed_from_u64(42));
    for name in ["p128", "p512", "p2048"] {
        let params = ParameterSet::by_name(name)
            .and_then(|set| set.parameters())
            .expect("preset");
        c.bench_function(&format!("certify_{name}"), |bencher| {
            bencher.iter(|| black_box(params.verify(&primes).expect("certify")))
        });
    }
}

fn bench_is_prime(c: &mut Criterion) {
    let params = ParameterSet::by_name("p512")
        .and_then(|set| set.parameters())
        .expect("preset");
    c.bench_function("is_probable_prime_512", |bencher| {
        bencher.iter(|| black_box(is_probable_prime(black_box(params.p()), DEFAULT_ROUNDS)))
    });
}

criterion_group!(benches, bench_generate, bench_certify, bench_is_prime);
criterion_main!(benches);
