//! Block structure.

use crate::encoding::block_hash;
use crate::hash::Hash;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Previous-hash sentinel carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Timestamp of the genesis block.
pub const GENESIS_TIMESTAMP: u64 = 0;

/// Hex digest of the genesis block, `SHA-256("0[]00")`.
pub const GENESIS_HASH_HEX: &str =
    "ec596eea922c4f9b003eb27d2ea8744d2d43e09401cb17f597906abea72a89ca";

/// Errors from rebuilding a block out of serialized fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("stored hash {stored} does not match block contents (expected {computed})")]
    HashMismatch { stored: Hash, computed: Hash },
}

/// One tamper-evident unit of the chain.
///
/// Fields are private so the stored hash always matches the other fields.
/// Linkage fields change only through [`Block::relink`], which consumes the
/// block and recomputes the hash. Deserializing goes through [`RawBlock`] and
/// rejects a stored hash that does not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    timestamp: u64,
    transactions: Vec<Transaction>,
    previous_hash: String,
    nonce: u64,
    hash: Hash,
}

/// Block fields as they appear on the wire, before the hash is checked.
#[derive(Deserialize)]
struct RawBlock {
    timestamp: u64,
    transactions: Vec<Transaction>,
    previous_hash: String,
    nonce: u64,
    hash: Hash,
}

impl TryFrom<RawBlock> for Block {
    type Error = BlockError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let block = Block::with_nonce(
            raw.timestamp,
            raw.transactions,
            raw.previous_hash,
            raw.nonce,
        );
        if block.hash != raw.hash {
            return Err(BlockError::HashMismatch {
                stored: raw.hash,
                computed: block.hash,
            });
        }
        Ok(block)
    }
}

impl Block {
    /// Create a block with a provisional previous hash and nonce 0.
    pub fn new(
        timestamp: u64,
        transactions: Vec<Transaction>,
        previous_hash: impl Into<String>,
    ) -> Self {
        Self::with_nonce(timestamp, transactions, previous_hash, 0)
    }

    /// Create a block with an explicit nonce.
    pub fn with_nonce(
        timestamp: u64,
        transactions: Vec<Transaction>,
        previous_hash: impl Into<String>,
        nonce: u64,
    ) -> Self {
        let previous_hash = previous_hash.into();
        let hash = block_hash(timestamp, &transactions, &previous_hash, nonce);
        Self {
            timestamp,
            transactions,
            previous_hash,
            nonce,
            hash,
        }
    }

    /// Create the genesis block.
    pub fn genesis() -> Self {
        Self::with_nonce(GENESIS_TIMESTAMP, Vec::new(), GENESIS_PREVIOUS_HASH, 0)
    }

    /// Recompute the digest from the stored fields.
    pub fn calculate_hash(&self) -> Hash {
        block_hash(
            self.timestamp,
            &self.transactions,
            &self.previous_hash,
            self.nonce,
        )
    }

    /// Replace the linkage fields and recompute the hash.
    pub fn relink(mut self, previous_hash: impl Into<String>, nonce: u64) -> Self {
        self.previous_hash = previous_hash.into();
        self.nonce = nonce;
        self.hash = self.calculate_hash();
        self
    }

    /// Check that the stored hash still matches the block's fields.
    pub fn verify_hash(&self) -> bool {
        self.calculate_hash() == self.hash
    }

    /// The stored block hash.
    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the number of transactions in this block.
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    /// Check if this block has the genesis shape.
    pub fn is_genesis(&self) -> bool {
        self.nonce == 0
            && self.timestamp == GENESIS_TIMESTAMP
            && self.previous_hash == GENESIS_PREVIOUS_HASH
            && self.transactions.is_empty()
    }

    /// Edit the transactions in place without recomputing the hash.
    ///
    /// Only for exercising tamper detection in tests.
    #[cfg(any(test, feature = "test-utils"))]
    #[doc(hidden)]
    pub fn tamper_transactions(&mut self, f: impl FnOnce(&mut Vec<Transaction>)) {
        f(&mut self.transactions);
    }
}
