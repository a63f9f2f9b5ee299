//! # Custom Operation - Messaging
//!
//! A custom operation carries opaque `data` tagged with a subtype `id`. The
//! messaging subtype stores a JSON [`MessagePayload`] there: one entry per
//! receiver, each encrypted independently for that receiver's memo key.

use super::errors::OperationError;
use super::operation::check_fee;
use ql_03_memo::{Memo, MemoCodec};
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_crypto::{PrivateKey, PublicKey};
use shared_types::{AccountId, Amount};
use std::collections::BTreeSet;

/// Subtype id of messaging payloads.
pub const SUBTYPE_MESSAGING: u16 = 1;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Custom {
    pub fee: Amount,
    pub payer: AccountId,
    pub required_auths: BTreeSet<AccountId>,
    pub id: u16,
    #[serde_as(as = "Hex")]
    pub data: Vec<u8>,
}

impl Custom {
    /// Wraps a messaging payload; `payer` is the only required authority.
    pub fn messaging(payer: AccountId, payload: &MessagePayload) -> Result<Self, OperationError> {
        let data =
            serde_json::to_vec(payload).map_err(|e| OperationError::Payload(e.to_string()))?;
        Ok(Self {
            fee: Amount::default(),
            payer,
            required_auths: BTreeSet::from([payer]),
            id: SUBTYPE_MESSAGING,
            data,
        })
    }

    /// Parses `data` as a messaging payload.
    pub fn message_payload(&self) -> Result<MessagePayload, OperationError> {
        if self.id != SUBTYPE_MESSAGING {
            return Err(OperationError::Payload(format!(
                "subtype {} is not messaging",
                self.id
            )));
        }
        serde_json::from_slice(&self.data).map_err(|e| OperationError::Payload(e.to_string()))
    }

    /// Pure field check.
    pub fn validate(&self) -> Result<(), OperationError> {
        check_fee(&self.fee)?;

        if self.required_auths.len() != 1 || !self.required_auths.contains(&self.payer) {
            return Err(OperationError::Payload(
                "payer must be the sole required authority".to_string(),
            ));
        }

        let payload = self.message_payload()?;
        if payload.receivers_data.is_empty() {
            return Err(OperationError::EmptyReceivers);
        }
        if payload.from != self.payer {
            return Err(OperationError::Payload(format!(
                "message sender {} differs from payer {}",
                payload.from, self.payer
            )));
        }
        Ok(())
    }
}

/// Messages from one sender to one or more receivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub from: AccountId,
    /// Sender's memo key; absent when every entry is plain text.
    pub pub_from: Option<PublicKey>,
    pub receivers_data: Vec<MessageReceiver>,
}

impl MessagePayload {
    pub fn new(from: AccountId) -> Self {
        Self {
            from,
            pub_from: None,
            receivers_data: Vec::new(),
        }
    }

    /// Adds an entry encrypted from `sender` to `receiver_key`.
    pub fn encrypted_for(
        mut self,
        to: AccountId,
        text: &str,
        sender: &PrivateKey,
        receiver_key: &PublicKey,
        nonce: u64,
    ) -> Result<Self, OperationError> {
        let memo = MemoCodec::encode(text.as_bytes(), sender, receiver_key, nonce)?;
        self.pub_from.get_or_insert(memo.from);
        self.receivers_data.push(MessageReceiver {
            to,
            pub_to: Some(memo.to),
            nonce: memo.nonce,
            data: memo.message,
        });
        Ok(self)
    }

    /// Adds an unencrypted entry.
    pub fn plain_for(mut self, to: AccountId, text: &str) -> Self {
        self.receivers_data.push(MessageReceiver {
            to,
            pub_to: None,
            nonce: 0,
            data: text.as_bytes().to_vec(),
        });
        self
    }
}

/// One receiver's copy of a message.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReceiver {
    pub to: AccountId,
    /// Receiver's memo key; `None` for plain text.
    pub pub_to: Option<PublicKey>,
    pub nonce: u64,
    #[serde_as(as = "Hex")]
    pub data: Vec<u8>,
}

impl MessageReceiver {
    pub fn is_encrypted(&self) -> bool {
        self.pub_to.is_some()
    }

    /// Message text. Encrypted entries are decoded with one party's private
    /// key and the other party's public key.
    pub fn text(
        &self,
        private_key: &PrivateKey,
        counterparty: &PublicKey,
    ) -> Result<String, OperationError> {
        let Some(pub_to) = self.pub_to else {
            return String::from_utf8(self.data.clone())
                .map_err(|_| OperationError::Payload("message is not UTF-8".to_string()));
        };

        let memo = Memo {
            from: *counterparty,
            to: pub_to,
            nonce: self.nonce,
            message: self.data.clone(),
        };
        Ok(MemoCodec::decode_text(&memo, private_key, counterparty)?)
    }
}
