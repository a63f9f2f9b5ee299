//! # Transfer Flow
//!
//! Account 1.2.19 sends 1.2.20 a transfer with a "hello" memo, paid at the
//! core unit price and signed with one key.

use super::support::{key, transaction_service, CHAIN_ID, HEAD_BLOCK, NOW};
use ql_02_fee_schedule::{Chargeable, FeeSchedule};
use ql_03_memo::{Memo, MemoCodec, MonotonicNonceSource, NonceSource};
use ql_04_operations::{Operation, Transfer};
use ql_05_transaction::{SignedTransaction, TransactionApi};
use shared_crypto::PrivateKey;
use shared_types::{AccountId, Amount, OperationKind, Price, CORE_ASSET};

fn memo_transfer(sender: &PrivateKey, receiver: &PrivateKey) -> Operation {
    let nonce = MonotonicNonceSource::new().next_nonce(&sender.public_key());
    let memo = MemoCodec::encode(b"hello", sender, &receiver.public_key(), nonce).unwrap();
    Transfer::new(AccountId::new(19), AccountId::new(20), Amount::core(1))
        .with_memo(memo)
        .into()
}

fn memo_of(signed: &SignedTransaction) -> &Memo {
    match &signed.transaction.operations[0] {
        Operation::Transfer(Transfer {
            memo: Some(memo), ..
        }) => memo,
        other => panic!("expected a transfer with memo, got {other:?}"),
    }
}

#[test]
fn test_memo_transfer_end_to_end() {
    let (alice, bob) = (key(1), key(2));
    let service = transaction_service();

    let signed = service
        .submit(vec![memo_transfer(&alice, &bob)], &[&alice])
        .unwrap();

    // Replay protection and expiry come from the chain snapshot and clock.
    assert_eq!(signed.transaction.ref_block_num, (HEAD_BLOCK & 0xFFFF) as u16);
    assert_eq!(
        signed.transaction.expiration,
        NOW.checked_add_secs(30).unwrap()
    );

    // One signature, recovering to the sender.
    assert_eq!(signed.signatures.len(), 1);
    assert!(signed.signatures[0].is_canonical());
    assert_eq!(signed.signers(&CHAIN_ID).unwrap(), vec![alice.public_key()]);

    // Receiver reads the memo with their key and the sender's public key.
    let memo = memo_of(&signed);
    assert_eq!(
        MemoCodec::decode_text(memo, &bob, &alice.public_key()).unwrap(),
        "hello"
    );

    assert_eq!(service.broadcaster().sent.lock().as_slice(), &[signed]);
}

#[test]
fn test_fee_reflects_memo_size() {
    let (alice, bob) = (key(1), key(2));
    let signed = transaction_service()
        .prepare(vec![memo_transfer(&alice, &bob)], &[&alice])
        .unwrap();

    let operation = &signed.transaction.operations[0];
    // 5 plaintext bytes plus the 16-byte tag.
    assert_eq!(operation.payload_size(), 21);

    let expected = FeeSchedule::default()
        .fee_for(OperationKind::Transfer, 21, &Price::unit(CORE_ASSET))
        .unwrap();
    assert_eq!(operation.fee(), &expected);
    assert_eq!(expected, Amount::core(500_000 + 20_508));
}

#[test]
fn test_third_party_cannot_read_memo() {
    let (alice, bob, eve) = (key(1), key(2), key(3));
    let signed = transaction_service()
        .prepare(vec![memo_transfer(&alice, &bob)], &[&alice])
        .unwrap();

    assert!(MemoCodec::decode(memo_of(&signed), &eve, &alice.public_key()).is_err());
    // The sender can still read their own memo.
    assert_eq!(
        MemoCodec::decode_text(memo_of(&signed), &alice, &bob.public_key()).unwrap(),
        "hello"
    );
}

#[test]
fn test_signed_transaction_survives_encoding() {
    let (alice, bob) = (key(1), key(2));
    let signed = transaction_service()
        .prepare(vec![memo_transfer(&alice, &bob)], &[&alice])
        .unwrap();

    let bytes = bincode::serialize(&signed).unwrap();
    let decoded: SignedTransaction = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, signed);
    assert_eq!(decoded.id().unwrap(), signed.id().unwrap());
    assert_eq!(decoded.signers(&CHAIN_ID).unwrap(), vec![alice.public_key()]);
}

#[test]
fn test_signature_bound_to_chain() {
    let (alice, bob) = (key(1), key(2));
    let signed = transaction_service()
        .prepare(vec![memo_transfer(&alice, &bob)], &[&alice])
        .unwrap();

    let elsewhere = shared_types::ChainId([0x42; 32]);
    assert_ne!(
        signed.signers(&elsewhere).ok(),
        Some(vec![alice.public_key()])
    );
}
