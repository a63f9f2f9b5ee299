//! # Messaging
//!
//! A custom operation from 1.2.19 to several receivers, each copy
//! encrypted for its own receiver.

use super::support::{key, transaction_service};
use ql_02_fee_schedule::{Chargeable, FeeSchedule};
use ql_04_operations::{Custom, MessagePayload, Operation, OperationError};
use ql_05_transaction::{SignedTransaction, TransactionApi, TransactionError};
use shared_types::{AccountId, OperationKind, Price, CORE_ASSET};

const SENDER: AccountId = AccountId::new(19);

fn custom_of(signed: &SignedTransaction) -> &Custom {
    match &signed.transaction.operations[0] {
        Operation::CustomMessage(custom) => custom,
        other => panic!("expected a custom operation, got {other:?}"),
    }
}

#[test]
fn test_each_receiver_reads_own_copy() {
    let (alice, bob, carol) = (key(1), key(2), key(3));
    let payload = MessagePayload::new(SENDER)
        .encrypted_for(AccountId::new(20), "hi bob", &alice, &bob.public_key(), 11)
        .unwrap()
        .encrypted_for(AccountId::new(21), "hi carol", &alice, &carol.public_key(), 12)
        .unwrap()
        .plain_for(AccountId::new(22), "hi everyone");
    let operation = Custom::messaging(SENDER, &payload).unwrap();

    let service = transaction_service();
    let signed = service.submit(vec![operation.into()], &[&alice]).unwrap();

    let received = custom_of(&signed).message_payload().unwrap();
    assert_eq!(received, payload);
    assert_eq!(received.pub_from, Some(alice.public_key()));

    let [to_bob, to_carol, to_all] = &received.receivers_data[..] else {
        panic!("expected three receivers");
    };
    assert_eq!(to_bob.text(&bob, &alice.public_key()).unwrap(), "hi bob");
    assert_eq!(to_carol.text(&carol, &alice.public_key()).unwrap(), "hi carol");
    assert!(!to_all.is_encrypted());
    assert_eq!(to_all.text(&bob, &alice.public_key()).unwrap(), "hi everyone");

    // Bob's key opens only Bob's copy.
    assert!(to_carol.text(&bob, &alice.public_key()).is_err());
    assert_eq!(service.broadcaster().sent.lock().len(), 1);
}

#[test]
fn test_fee_charged_per_payload_kbyte() {
    let alice = key(1);
    let text = "x".repeat(1_500);
    let payload = MessagePayload::new(SENDER).plain_for(AccountId::new(20), &text);
    let operation: Operation = Custom::messaging(SENDER, &payload).unwrap().into();
    let size = operation.payload_size();
    assert!(size > 1_500);

    let signed = transaction_service()
        .prepare(vec![operation], &[&alice])
        .unwrap();
    let expected = FeeSchedule::default()
        .fee_for(OperationKind::CustomMessage, size, &Price::unit(CORE_ASSET))
        .unwrap();
    assert_eq!(custom_of(&signed).fee, expected);
    assert!(expected.amount > 500_000 + 1_000_000);
}

#[test]
fn test_message_without_receivers_is_rejected() {
    let alice = key(1);
    let operation = Custom::messaging(SENDER, &MessagePayload::new(SENDER)).unwrap();
    let service = transaction_service();

    assert_eq!(
        service.submit(vec![operation.into()], &[&alice]),
        Err(TransactionError::Operation(OperationError::EmptyReceivers))
    );
    assert!(service.broadcaster().sent.lock().is_empty());
}

#[test]
fn test_sender_must_be_payer() {
    let alice = key(1);
    let payload = MessagePayload::new(AccountId::new(99)).plain_for(AccountId::new(20), "hi");
    let operation = Custom::messaging(SENDER, &payload).unwrap();

    assert!(matches!(
        transaction_service().prepare(vec![operation.into()], &[&alice]),
        Err(TransactionError::Operation(OperationError::Payload(_)))
    ));
}
