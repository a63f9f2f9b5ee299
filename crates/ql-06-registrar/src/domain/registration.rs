//! Registration operation builders.
//!
//! Builders validate eagerly so a malformed request never reaches the
//! assembler.

use ql_01_authority::Authority;
use ql_04_operations::{AccountCreate, Operation, OperationError};
use shared_crypto::PublicKey;
use shared_types::AccountId;

/// Plain registration: owner and active must each be a single key.
pub fn build_registration(
    name: &str,
    registrar: AccountId,
    owner: Authority,
    active: Authority,
    memo_key: PublicKey,
) -> Result<Operation, OperationError> {
    let operation =
        Operation::register(AccountCreate::new(name, registrar, owner, active, memo_key));
    operation.validate()?;
    Ok(operation)
}

/// Registration with arbitrary weighted owner and active authorities.
pub fn build_multisig_registration(
    name: &str,
    registrar: AccountId,
    owner: Authority,
    active: Authority,
    memo_key: PublicKey,
) -> Result<Operation, OperationError> {
    let operation =
        Operation::register_multisig(AccountCreate::new(name, registrar, owner, active, memo_key));
    operation.validate()?;
    Ok(operation)
}
