//! # Registrar Flow
//!
//! Brain-key accounts and multisig accounts registered through the real
//! transaction service, paid and signed by a wallet-owned registrar.

use super::support::{key, transaction_service, InMemoryWallet, Service, CHAIN_ID};
use ql_01_authority::Authority;
use ql_04_operations::{AccountCreate, Operation};
use ql_05_transaction::SignedTransaction;
use ql_06_registrar::{
    derive_identity, AccountKeys, AccountRecord, BrainKey, RegistrarApi, RegistrarError,
    RegistrarService,
};
use shared_crypto::PrivateKey;
use shared_types::{AccountId, Amount};

const REGISTRAR_ID: AccountId = AccountId::new(17);

fn record(id: AccountId, name: &str, active: &PrivateKey) -> AccountRecord {
    AccountRecord {
        id,
        name: name.to_string(),
        owner: Authority::single_key(active.public_key()),
        active: Authority::single_key(active.public_key()),
        memo_key: active.public_key(),
    }
}

fn registrar_service(registrar_key: &PrivateKey) -> RegistrarService<InMemoryWallet, Service> {
    let wallet = InMemoryWallet::default()
        .with_account(record(REGISTRAR_ID, "dcore-faucet", registrar_key), true)
        .with_account(record(AccountId::new(18), "taken-name", &key(9)), false);
    RegistrarService::new(wallet, transaction_service())
}

fn registration(signed: &SignedTransaction) -> &AccountCreate {
    match &signed.transaction.operations[..] {
        [Operation::AccountRegister(create)] | [Operation::AccountRegisterMultisig(create)] => {
            create
        }
        other => panic!("expected one registration, got {other:?}"),
    }
}

#[test]
fn test_brain_key_is_deterministic() {
    let spoken = "  velvet ocean   Harbor lamp\tquiet  ";
    let written = "VELVET OCEAN HARBOR LAMP QUIET";

    let (first, _) = derive_identity(written).unwrap();
    let (second, _) = derive_identity(written).unwrap();
    assert_eq!(first.to_bytes(), second.to_bytes());
    assert_eq!(
        derive_identity(spoken).unwrap().1,
        derive_identity(written).unwrap().1
    );

    let a = BrainKey::new(spoken).unwrap();
    let b = BrainKey::new(written).unwrap();

    let keys_a = AccountKeys::from_brain_key(&a).unwrap();
    let keys_b = AccountKeys::from_brain_key(&b).unwrap();
    assert_eq!(keys_a.active_public(), keys_b.active_public());
    assert_eq!(keys_a.memo_public(), keys_a.active_public());
}

#[test]
fn test_create_account_from_brain_key() {
    let registrar_key = key(7);
    let service = registrar_service(&registrar_key);
    let brain = BrainKey::generate();
    let keys = AccountKeys::from_brain_key(&brain).unwrap();

    let signed = service
        .create_account(&brain, "fresh-account", "dcore-faucet", &registrar_key)
        .unwrap();

    let create = registration(&signed);
    assert_eq!(create.name, "fresh-account");
    assert_eq!(create.registrar, REGISTRAR_ID);
    assert_eq!(create.owner, Authority::single_key(keys.owner_public()));
    assert_eq!(create.active, Authority::single_key(keys.active_public()));
    assert_eq!(create.options.memo_key, keys.memo_public());
    assert_eq!(create.fee, Amount::core(5_000_000));

    // Signed by the registrar and broadcast once.
    assert_eq!(
        signed.signers(&CHAIN_ID).unwrap(),
        vec![registrar_key.public_key()]
    );
    assert_eq!(
        service.transactions().broadcaster().sent.lock().as_slice(),
        &[signed]
    );
}

#[test]
fn test_register_multisig_account() {
    let registrar_key = key(7);
    let service = registrar_service(&registrar_key);
    let owner = Authority::builder(2)
        .key(key(1).public_key(), 1)
        .key(key(2).public_key(), 1)
        .key(key(3).public_key(), 1)
        .build()
        .unwrap();
    let active = Authority::builder(1)
        .account(REGISTRAR_ID, 1)
        .key(key(1).public_key(), 1)
        .build()
        .unwrap();

    let signed = service
        .register_multisig_account(
            "joint-treasury",
            owner.clone(),
            active.clone(),
            key(4).public_key(),
            "dcore-faucet",
            &registrar_key,
        )
        .unwrap();

    assert!(matches!(
        signed.transaction.operations[0],
        Operation::AccountRegisterMultisig(_)
    ));
    let create = registration(&signed);
    assert_eq!(create.owner, owner);
    assert_eq!(create.active, active);
}

#[test]
fn test_registration_failures_do_not_broadcast() {
    let registrar_key = key(7);
    let service = registrar_service(&registrar_key);
    let pk = key(1).public_key();

    assert_eq!(
        service.register_account("taken-name", pk, pk, pk, "dcore-faucet", &registrar_key),
        Err(RegistrarError::NameTaken("taken-name".to_string()))
    );
    assert_eq!(
        service.register_account("fresh-account", pk, pk, pk, "no-such-faucet", &registrar_key),
        Err(RegistrarError::UnknownRegistrar("no-such-faucet".to_string()))
    );
    assert_eq!(
        service.register_account("fresh-account", pk, pk, pk, "taken-name", &key(9)),
        Err(RegistrarError::RegistrarNotOwned("taken-name".to_string()))
    );
    assert_eq!(
        service.register_account("fresh-account", pk, pk, pk, "dcore-faucet", &key(8)),
        Err(RegistrarError::SignerNotAuthorized("dcore-faucet".to_string()))
    );
    assert!(service.transactions().broadcaster().sent.lock().is_empty());
}
