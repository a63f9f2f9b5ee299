//! # Multisig Authorities
//!
//! Weighted key sets, account delegation and bounded resolution, checked
//! against signatures recovered from real transactions.

use super::support::{key, transaction_service, CHAIN_ID};
use ql_01_authority::{Authority, AuthorityError, AuthorityEvaluator, KeysOnly, SignerSet};
use ql_04_operations::{Operation, Transfer};
use ql_05_transaction::{TransactionApi, TransactionError};
use shared_types::{AccountId, Amount};
use std::collections::HashMap;

fn transfer() -> Operation {
    Transfer::new(AccountId::new(30), AccountId::new(20), Amount::core(5)).into()
}

#[test]
fn test_two_of_two_needs_both_signatures() {
    let (a, b) = (key(1), key(2));
    let authority = Authority::builder(2)
        .key(a.public_key(), 1)
        .key(b.public_key(), 1)
        .build()
        .unwrap();
    let service = transaction_service();

    let partial = service.prepare(vec![transfer()], &[&a]).unwrap();
    assert!(!service.authorizes(&partial, &authority, &KeysOnly).unwrap());

    let full = service.prepare(vec![transfer()], &[&a, &b]).unwrap();
    assert_eq!(
        full.signers(&CHAIN_ID).unwrap(),
        vec![a.public_key(), b.public_key()]
    );
    assert!(service.authorizes(&full, &authority, &KeysOnly).unwrap());
}

#[test]
fn test_duplicate_signer_adds_no_weight() {
    let (a, b) = (key(1), key(2));
    let authority = Authority::builder(2)
        .key(a.public_key(), 1)
        .key(b.public_key(), 1)
        .build()
        .unwrap();
    let service = transaction_service();

    let twice = service.prepare(vec![transfer()], &[&a, &a]).unwrap();
    assert_eq!(twice.signatures.len(), 2);
    assert!(!service.authorizes(&twice, &authority, &KeysOnly).unwrap());
}

#[test]
fn test_weighted_threshold() {
    let (heavy, light_1, light_2) = (key(1), key(2), key(3));
    let authority = Authority::builder(3)
        .key(heavy.public_key(), 3)
        .key(light_1.public_key(), 1)
        .key(light_2.public_key(), 1)
        .build()
        .unwrap();
    let service = transaction_service();

    let by_heavy = service.prepare(vec![transfer()], &[&heavy]).unwrap();
    assert!(service.authorizes(&by_heavy, &authority, &KeysOnly).unwrap());

    let by_lights = service
        .prepare(vec![transfer()], &[&light_1, &light_2])
        .unwrap();
    assert!(!service.authorizes(&by_lights, &authority, &KeysOnly).unwrap());
}

#[test]
fn test_delegation_through_account() {
    let (treasurer, auditor) = (key(1), key(2));
    let treasury = AccountId::new(40);

    // 1.2.40 is controlled by the treasurer's key; the spending authority
    // needs 1.2.40 plus the auditor.
    let mut resolver = HashMap::new();
    resolver.insert(treasury, Authority::single_key(treasurer.public_key()));
    let authority = Authority::builder(2)
        .account(treasury, 1)
        .key(auditor.public_key(), 1)
        .build()
        .unwrap();

    let service = transaction_service();
    let signed = service
        .prepare(vec![transfer()], &[&treasurer, &auditor])
        .unwrap();
    assert!(service.authorizes(&signed, &authority, &resolver).unwrap());

    // Without the resolver the delegated weight is missing.
    assert!(!service.authorizes(&signed, &authority, &KeysOnly).unwrap());
}

#[test]
fn test_authority_cycle_is_reported() {
    let (x, y) = (AccountId::new(50), AccountId::new(51));
    let mut resolver = HashMap::new();
    resolver.insert(x, Authority::builder(1).account(y, 1).build().unwrap());
    resolver.insert(y, Authority::builder(1).account(x, 1).build().unwrap());

    let root = Authority::builder(1).account(x, 1).build().unwrap();
    let service = transaction_service();
    let signed = service.prepare(vec![transfer()], &[&key(1)]).unwrap();

    assert!(matches!(
        service.authorizes(&signed, &root, &resolver),
        Err(TransactionError::Authority(AuthorityError::AuthorityCycle { .. }))
    ));
}

#[test]
fn test_depth_bound_applies_to_long_chains() {
    let signer = key(1);
    let chain: Vec<AccountId> = (60..64).map(AccountId::new).collect();

    // 1.2.60 -> 1.2.61 -> 1.2.62 -> 1.2.63 -> key
    let mut resolver = HashMap::new();
    for pair in chain.windows(2) {
        resolver.insert(pair[0], Authority::builder(1).account(pair[1], 1).build().unwrap());
    }
    resolver.insert(chain[3], Authority::single_key(signer.public_key()));

    let root = Authority::builder(1).account(chain[0], 1).build().unwrap();
    let signers = SignerSet::from_keys([signer.public_key()]);

    let shallow = AuthorityEvaluator::new(&resolver);
    assert!(matches!(
        shallow.satisfies(&root, &signers),
        Err(AuthorityError::AuthorityCycle { depth: 3, .. })
    ));

    let deep = AuthorityEvaluator::new(&resolver).with_max_depth(4);
    assert!(deep.satisfies(&root, &signers).unwrap());
}
