use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use poseidon::{Poseidon, PoseidonConfig};

const MODULI: [(&str, &str); 3] = [
    ("p32", "3552575077"),
    ("p64", "18005185968437325397"),
    ("p128", "295090870502302888741081815488172298301"),
];

fn modulus(literal: &str) -> BigUint {
    BigUint::parse_bytes(literal.as_bytes(), 10).expect("literal")
}

fn bench_instantiate(c: &mut Criterion) {
    for (name, literal) in MODULI {
        let config = PoseidonConfig::new(modulus(literal));
        c.bench_function(&format!("poseidon_new_{name}"), |bencher| {
            bencher.iter(|| {
                let poseidon = Poseidon::new(black_box(config.clone())).expect("config");
                black_box(poseidon);
            })
        });
    }
}

fn bench_hash(c: &mut Criterion) {
    for (name, literal) in MODULI {
        let poseidon = Poseidon::with_modulus(modulus(literal)).expect("config");
        let input = [170u32, 41, 0, 0].map(BigUint::from);
        c.bench_function(&format!("poseidon_hash_{name}"), |bencher| {
            bencher.iter(|| black_box(poseidon.hash(black_box(&input))))
        });
    }
}

criterion_group!(benches, bench_instantiate, bench_hash);
criterion_main!(benches);
