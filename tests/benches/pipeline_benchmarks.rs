//! # Quill Pipeline Benchmarks
//!
//! | Stage | Work measured |
//! |-------|---------------|
//! | Signing | Digest + compact recoverable signature |
//! | Recovery | Signer recovery from a compact signature |
//! | Memo | ECDH + key schedule + AEAD encrypt |
//! | Fees | Fee table lookup and price conversion |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ql_02_fee_schedule::FeeSchedule;
use ql_03_memo::MemoCodec;
use ql_04_operations::{Operation, Transfer};
use ql_05_transaction::{AssemblerConfig, TransactionAssembler};
use rand::Rng;
use shared_crypto::PrivateKey;
use shared_types::{AccountId, Amount, BlockId, ChainId, Price, TimePointSec, CORE_ASSET};

const CHAIN: ChainId = ChainId([0x17; 32]);

fn transfers(count: usize) -> Vec<Operation> {
    (0..count)
        .map(|i| {
            Transfer::new(
                AccountId::new(19),
                AccountId::new(20 + i as u64),
                Amount::core(1 + i as u64),
            )
            .into()
        })
        .collect()
}

fn fee_ready(operations: Vec<Operation>) -> TransactionAssembler {
    let mut assembler = TransactionAssembler::new(AssemblerConfig::default());
    for operation in operations {
        assembler.add_operation(operation).unwrap();
    }
    assembler.set_reference_block(&BlockId([0xAB; 20])).unwrap();
    assembler
        .expire_after(TimePointSec::from_secs(1_700_000_000))
        .unwrap();
    assembler
        .compute_fees(&FeeSchedule::default(), &Price::unit(CORE_ASSET))
        .unwrap();
    assembler
}

fn bench_signing(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing");
    let key = PrivateKey::generate();

    for count in [1usize, 10, 100] {
        let assembler = fee_ready(transfers(count));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("sign_transaction", count), &count, |b, _| {
            b.iter(|| black_box(assembler.calculate_signature(&key, &CHAIN).unwrap()))
        });
    }

    let mut assembler = fee_ready(transfers(1));
    let signature = *assembler.sign(&key, &CHAIN).unwrap();
    let digest = assembler.transaction().signature_digest(&CHAIN).unwrap();
    group.bench_function("recover_signer", |b| {
        b.iter(|| black_box(signature.recover(&digest).unwrap()))
    });

    group.finish();
}

fn bench_memo(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo");
    let (sender, receiver) = (PrivateKey::generate(), PrivateKey::generate());
    let receiver_key = receiver.public_key();
    let mut rng = rand::thread_rng();

    for size in [16usize, 256, 2048] {
        let message: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &message, |b, message| {
            b.iter(|| black_box(MemoCodec::encode(message, &sender, &receiver_key, 42).unwrap()))
        });
    }

    group.finish();
}

fn bench_fees(c: &mut Criterion) {
    let schedule = FeeSchedule::default();
    let price = Price::unit(CORE_ASSET);

    c.bench_function("fees/compute_100_transfers", |b| {
        b.iter(|| {
            let mut assembler = TransactionAssembler::new(AssemblerConfig::default());
            for operation in transfers(100) {
                assembler.add_operation(operation).unwrap();
            }
            assembler.compute_fees(&schedule, &price).unwrap();
            black_box(assembler)
        })
    });
}

criterion_group!(benches, bench_signing, bench_memo, bench_fees);
criterion_main!(benches);
