use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes128_core::{cipher, decrypt_block, encrypt_block, expand_key, Aes128Key, Mode};

fn random_key(rng: &mut ChaCha20Rng) -> Aes128Key {
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    Aes128Key::from(key)
}

fn bench_key_expansion(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key = random_key(&mut rng);
    c.bench_function("expand_key", |b| {
        b.iter(|| expand_key(black_box(&key)));
    });
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let key = random_key(&mut rng);
    let round_keys = expand_key(&key);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("block");
    group.throughput(Throughput::Bytes(16));
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(black_box(&block), &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(black_box(&block), &round_keys));
    });
    group.bench_function("cipher_with_expansion", |b| {
        let mut out = [0u8; 16];
        b.iter(|| {
            cipher(black_box(&block), &mut out, &key, Mode::Encrypt);
            black_box(out);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_blocks);
criterion_main!(benches);
