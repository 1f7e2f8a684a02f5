use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use secp256k1_ecdsa::{secp256k1, PrivateKeyExt as _, Signer as _};
use std::hint::black_box;

fn benchmark_signature_generation(c: &mut Criterion) {
    let mut msg = [0u8; 32];
    thread_rng().fill(&mut msg);
    c.bench_function(
        &format!("{}/msg_len={}", module_path!(), msg.len()),
        |b| {
            b.iter_batched(
                || secp256k1::PrivateKey::from_rng(&mut thread_rng()),
                |signer| {
                    black_box(signer.sign(&mut thread_rng(), &msg));
                },
                BatchSize::SmallInput,
            );
        },
    );
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_signature_generation
}
