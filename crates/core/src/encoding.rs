//! Canonical encoding of block contents for hashing.
//!
//! The hash preimage of a block is the concatenation, with no separators, of:
//!
//! ```text
//! decimal(timestamp) ++ encode_transactions(txs) ++ previous_hash ++ decimal(nonce)
//! ```
//!
//! Transactions encode as compact JSON, one object per transaction with keys
//! in the order `sender`, `receiver`, `amount`:
//!
//! ```text
//! [{"sender":"Alice","receiver":"Bob","amount":10}]
//! ```
//!
//! An empty list encodes as `[]`, so the genesis preimage is `0[]00`.

use crate::hash::{sha256, Hash};
use crate::transaction::Transaction;

/// Encode a transaction list in its canonical form.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen for plain strings and
/// integers.
pub fn encode_transactions(transactions: &[Transaction]) -> String {
    serde_json::to_string(transactions).expect("transaction serialization should not fail")
}

/// Build the full hash preimage for a block's fields.
pub fn block_preimage(
    timestamp: u64,
    transactions: &[Transaction],
    previous_hash: &str,
    nonce: u64,
) -> String {
    let mut out = timestamp.to_string();
    out.push_str(&encode_transactions(transactions));
    out.push_str(previous_hash);
    out.push_str(&nonce.to_string());
    out
}

/// Digest a block's fields: SHA-256 over [`block_preimage`].
pub fn block_hash(
    timestamp: u64,
    transactions: &[Transaction],
    previous_hash: &str,
    nonce: u64,
) -> Hash {
    sha256(block_preimage(timestamp, transactions, previous_hash, nonce).as_bytes())
}
