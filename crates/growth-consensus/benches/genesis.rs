use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growth_consensus::{
    chain_params, decode_compact, encode_compact, merkle_root_txids, GenesisSpec, Network,
};

fn bench_genesis_build(c: &mut Criterion) {
    let spec = GenesisSpec::standard(1_581_238_800, 885_106, 0x1e0f_fff0);
    c.bench_function("genesis_build_and_hash", |b| {
        b.iter(|| black_box(&spec).build().hash())
    });
    c.bench_function("chain_params_verify_main", |b| {
        b.iter(|| {
            chain_params(black_box(Network::Main))
                .and_then(|p| p.verify())
                .is_ok()
        })
    });
}

fn bench_compact(c: &mut Criterion) {
    c.bench_function("compact_decode_encode", |b| {
        b.iter(|| encode_compact(&decode_compact(black_box(0x1e0f_fff0)).value).ok())
    });
}

fn bench_merkle(c: &mut Criterion) {
    let leaves: Vec<[u8; 32]> = (0u8..=254).map(|i| [i; 32]).collect();
    c.bench_function("merkle_root_255_leaves", |b| {
        b.iter(|| merkle_root_txids(black_box(&leaves)))
    });
}

criterion_group!(benches, bench_genesis_build, bench_compact, bench_merkle);
criterion_main!(benches);
