use group::{DomainParameters, ParameterSet};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{KeyPair, Signature, VerifyingKey, poseidon_for};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let preset = ParameterSet::by_name("p128").expect("preset");
    let params = preset.parameters().expect("parameters");
    let hash = poseidon_for(&params, &preset.hash).expect("poseidon");

    let keys = KeyPair::generate(&params, &mut rng).expect("keys");

    let params_bytes = bincode::serialize(&params).expect("serialize params");
    let vk_bytes = bincode::serialize(keys.verifying_key()).expect("serialize vk");

    let msg = BigUint::from_bytes_be(b"hello schnorr");
    let sig = keys.sign(&params, &msg, &hash).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let params2: DomainParameters =
        bincode::deserialize(&params_bytes).expect("deserialize params");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    assert!(vk2.verify(&params2, &msg, &sig2, &hash));
    println!("s = {}\nh = {}", sig2.s, sig2.h);
}
