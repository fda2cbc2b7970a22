//! Transactions carried by blocks.
//!
//! A transaction is an opaque `{sender, receiver, amount}` triple. The chain
//! never checks balances or signatures; transactions only feed the block hash.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing the `SENDER:RECEIVER:AMOUNT` text form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTransactionError {
    #[error("expected SENDER:RECEIVER:AMOUNT, got {0:?}")]
    Malformed(String),

    #[error("empty {0} in transaction")]
    EmptyField(&'static str),

    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
}

/// A value transfer between two parties.
///
/// Field order matters: it is the key order of the canonical encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// Sending party.
    pub sender: String,
    /// Receiving party.
    pub receiver: String,
    /// Amount transferred.
    pub amount: u64,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.sender, self.receiver, self.amount)
    }
}

impl FromStr for Transaction {
    type Err = ParseTransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [sender, receiver, amount] = parts.as_slice() else {
            return Err(ParseTransactionError::Malformed(s.to_string()));
        };

        let sender = sender.trim();
        let receiver = receiver.trim();
        if sender.is_empty() {
            return Err(ParseTransactionError::EmptyField("sender"));
        }
        if receiver.is_empty() {
            return Err(ParseTransactionError::EmptyField("receiver"));
        }

        let amount = amount
            .trim()
            .parse::<u64>()
            .map_err(|_| ParseTransactionError::InvalidAmount(amount.to_string()))?;

        Ok(Self::new(sender, receiver, amount))
    }
}
