//! # Assembler State Machine
//!
//! Driving `TransactionAssembler` by hand, in and out of order.

use super::support::{block_id, key, CHAIN_ID, HEAD_BLOCK, NOW};
use ql_02_fee_schedule::FeeSchedule;
use ql_04_operations::{Operation, Transfer};
use ql_05_transaction::{AssemblerConfig, AssemblerState, TransactionAssembler, TransactionError};
use shared_types::{AccountId, Amount, Price, TimePointSec, CORE_ASSET};

const UNIT: Price = Price::unit(CORE_ASSET);

fn transfer(amount: u64) -> Operation {
    Transfer::new(AccountId::new(19), AccountId::new(20), Amount::core(amount)).into()
}

fn ready_assembler() -> TransactionAssembler {
    let mut assembler = TransactionAssembler::new(AssemblerConfig::for_testing());
    assembler.add_operation(transfer(1)).unwrap();
    assembler.add_operation(transfer(2)).unwrap();
    assembler.set_reference_block(&block_id(HEAD_BLOCK)).unwrap();
    assembler.expire_after(NOW).unwrap();
    assembler
        .compute_fees(&FeeSchedule::default(), &UNIT)
        .unwrap();
    assembler
}

#[test]
fn test_full_lifecycle() {
    let mut assembler = ready_assembler();
    assert_eq!(assembler.state(), AssemblerState::Feed);

    let alice = key(1);
    let signature = *assembler.sign(&alice, &CHAIN_ID).unwrap();
    assert_eq!(assembler.state(), AssemblerState::Signed);
    assembler.validate().unwrap();
    assert_eq!(assembler.state(), AssemblerState::Validated);

    let signed = assembler.into_signed().unwrap();
    assert_eq!(signed.signatures, vec![signature]);
    let amounts: Vec<u64> = signed
        .transaction
        .operations
        .iter()
        .map(|op| match op {
            Operation::Transfer(t) => t.amount.amount,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(amounts, vec![1, 2]);
}

#[test]
fn test_signing_before_fees_is_incomplete() {
    let mut assembler = TransactionAssembler::new(AssemblerConfig::default());
    assembler.add_operation(transfer(1)).unwrap();
    assembler.set_reference_block(&block_id(HEAD_BLOCK)).unwrap();
    assembler.expire_after(NOW).unwrap();

    assert_eq!(
        assembler.sign(&key(1), &CHAIN_ID).map(|s| *s),
        Err(TransactionError::IncompleteTransaction {
            reason: "fees not computed"
        })
    );
}

#[test]
fn test_signing_without_reference_block_is_incomplete() {
    let mut assembler = TransactionAssembler::new(AssemblerConfig::default());
    assembler.add_operation(transfer(1)).unwrap();
    assembler.expire_after(NOW).unwrap();
    assembler
        .compute_fees(&FeeSchedule::default(), &UNIT)
        .unwrap();

    assert_eq!(
        assembler.calculate_signature(&key(1), &CHAIN_ID),
        Err(TransactionError::IncompleteTransaction {
            reason: "reference block not set"
        })
    );
}

#[test]
fn test_signed_transaction_is_frozen() {
    let mut assembler = ready_assembler();
    assembler.sign(&key(1), &CHAIN_ID).unwrap();

    assert_eq!(
        assembler.add_operation(transfer(3)),
        Err(TransactionError::FrozenTransaction)
    );
    assert_eq!(
        assembler.set_expiration(TimePointSec::from_secs(1)),
        Err(TransactionError::FrozenTransaction)
    );
    assert_eq!(
        assembler.compute_fees(&FeeSchedule::default(), &UNIT),
        Err(TransactionError::FrozenTransaction)
    );

    // More signatures are still accepted.
    assembler.sign(&key(2), &CHAIN_ID).unwrap();
    assert_eq!(assembler.signatures().len(), 2);
}

#[test]
fn test_calculate_signature_matches_sign() {
    let mut assembler = ready_assembler();
    let alice = key(1);
    let preview = assembler.calculate_signature(&alice, &CHAIN_ID).unwrap();
    assert!(assembler.signatures().is_empty());

    let attached = *assembler.sign(&alice, &CHAIN_ID).unwrap();
    assert_eq!(preview, attached);
}

#[test]
fn test_bounds_from_config() {
    let mut assembler = ready_assembler();
    for seed in 1..=4 {
        assembler.sign(&key(seed), &CHAIN_ID).unwrap();
    }
    assert_eq!(
        assembler.sign(&key(5), &CHAIN_ID).map(|s| *s),
        Err(TransactionError::TooManySignatures { count: 5, max: 4 })
    );

    let mut assembler = TransactionAssembler::new(AssemblerConfig::for_testing());
    for amount in 1..=4 {
        assembler.add_operation(transfer(amount)).unwrap();
    }
    assert_eq!(
        assembler.add_operation(transfer(5)),
        Err(TransactionError::TooManyOperations { count: 5, max: 4 })
    );
}

#[test]
fn test_unsigned_assembler_cannot_be_handed_out() {
    let mut assembler = ready_assembler();
    assert!(matches!(
        assembler.validate(),
        Err(TransactionError::IncompleteTransaction { .. })
    ));
    assert!(matches!(
        ready_assembler().into_signed(),
        Err(TransactionError::IncompleteTransaction { .. })
    ));
}

#[test]
fn test_unknown_fee_kind() {
    let mut assembler = TransactionAssembler::new(AssemblerConfig::default());
    assembler.add_operation(transfer(1)).unwrap();
    assert!(matches!(
        assembler.compute_fees(&FeeSchedule::empty(), &UNIT),
        Err(TransactionError::Fee(_))
    ));
}
