//! The append-only chain of blocks.
//!
//! A [`Blockchain`] always holds at least the genesis block. Appending
//! overwrites the new block's linkage fields, so whatever previous hash and
//! nonce the caller put in are discarded.

use hashchain_core::{Block, Hash};
use thiserror::Error;
use tracing::{debug, warn};

/// Nonce assigned to the first block appended after genesis.
pub const FIRST_NONCE: u64 = 1;

/// Integrity faults found by [`Blockchain::verify`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("block 0 is not a genesis block")]
    InvalidGenesis,

    #[error("block {index} hash does not match its contents")]
    HashMismatch { index: usize },

    #[error("block {index} previous_hash does not match block {}", .index - 1)]
    BrokenLink { index: usize },

    #[error("block {index} nonce mismatch (expected {expected}, got {got})")]
    NonceMismatch { index: usize, expected: u64, got: u64 },
}

pub type Result<T> = std::result::Result<T, ChainError>;

/// An ordered, append-only sequence of blocks seeded with genesis.
#[derive(Debug)]
pub struct Blockchain {
    blocks: Vec<Block>,
    next_nonce: u64,
}

impl Blockchain {
    /// Create a chain holding only the genesis block.
    ///
    /// Crate-private: outside this crate the only chain is the shared one
    /// returned by [`Blockchain::instance`].
    pub(crate) fn new() -> Self {
        Self {
            blocks: vec![Block::genesis()],
            next_nonce: FIRST_NONCE,
        }
    }

    /// The most recently appended block.
    pub fn latest_block(&self) -> &Block {
        // `new` seeds genesis and nothing removes blocks.
        &self.blocks[self.blocks.len() - 1]
    }

    /// Link `block` to the current tip and append it.
    ///
    /// Sets the previous hash to the tip's hash, assigns the next nonce,
    /// recomputes the block hash, then bumps the counter.
    pub fn append_block(&mut self, block: Block) -> &Block {
        let previous_hash = self.latest_block().hash().to_hex();
        let nonce = self.next_nonce;
        let block = block.relink(previous_hash, nonce);

        debug!(
            nonce,
            hash = %block.hash(),
            txs = block.tx_count(),
            "appended block"
        );

        self.blocks.push(block);
        self.next_nonce += 1;
        self.latest_block()
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: genesis is never removed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks in append order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Block at `index` (0 is genesis).
    pub fn get_block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Nonce the next appended block will receive.
    pub fn next_nonce(&self) -> u64 {
        self.next_nonce
    }

    /// Walk the chain and report the first integrity fault.
    pub fn verify(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(%err, "chain verification failed");
        }
        result
    }

    fn check(&self) -> Result<()> {
        let genesis = self.blocks.first().ok_or(ChainError::InvalidGenesis)?;
        if !genesis.is_genesis() {
            return Err(ChainError::InvalidGenesis);
        }
        if !genesis.verify_hash() {
            return Err(ChainError::HashMismatch { index: 0 });
        }

        for (index, pair) in self.blocks.windows(2).enumerate() {
            let index = index + 1;
            let (parent, block) = (&pair[0], &pair[1]);

            if !block.verify_hash() {
                return Err(ChainError::HashMismatch { index });
            }
            if !parent.hash().matches_hex(block.previous_hash()) {
                return Err(ChainError::BrokenLink { index });
            }
            if block.nonce() != index as u64 {
                return Err(ChainError::NonceMismatch {
                    index,
                    expected: index as u64,
                    got: block.nonce(),
                });
            }
        }

        Ok(())
    }

    /// Get chain statistics.
    pub fn stats(&self) -> ChainStats {
        let latest = self.latest_block();
        ChainStats {
            length: self.len(),
            latest_hash: latest.hash(),
            latest_nonce: latest.nonce(),
            total_transactions: self.blocks.iter().map(Block::tx_count).sum(),
        }
    }
}

/// Chain statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStats {
    /// Number of blocks, genesis included.
    pub length: usize,
    /// Hash of the latest block.
    pub latest_hash: Hash,
    /// Nonce of the latest block.
    pub latest_nonce: u64,
    /// Transactions across all blocks.
    pub total_transactions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashchain_core::{Transaction, GENESIS_HASH_HEX};

    fn transfer(amount: u64) -> Vec<Transaction> {
        vec![Transaction::new("Alice", "Bob", amount)]
    }

    /// Swap in a block that bypasses `append_block`.
    fn tamper(chain: &mut Blockchain, index: usize, block: Block) {
        chain.blocks[index] = block;
    }

    #[test]
    fn test_new_chain_has_genesis() {
        let chain = Blockchain::new();

        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert!(chain.latest_block().is_genesis());
        assert_eq!(chain.latest_block().hash().to_hex(), GENESIS_HASH_HEX);
        assert_eq!(chain.next_nonce(), FIRST_NONCE);
        assert!(chain.verify().is_ok());
    }

    #[test]
    fn test_append_overwrites_linkage() {
        let mut chain = Blockchain::new();
        let tip = chain.latest_block().hash();
        let counter = chain.next_nonce();

        let block = Block::new(1, transfer(10), "X");
        let claimed = block.hash();
        let stored = chain.append_block(block).clone();

        assert_eq!(stored.previous_hash(), tip.to_hex());
        assert_ne!(stored.previous_hash(), "X");
        assert_eq!(stored.nonce(), counter);
        assert_ne!(stored.hash(), claimed);
        assert!(stored.verify_hash());
        assert_eq!(stored.transactions(), transfer(10).as_slice());
        assert_eq!(chain.next_nonce(), counter + 1);
        assert_eq!(chain.latest_block(), &stored);
    }

    #[test]
    fn test_first_append_golden_hash() {
        let mut chain = Blockchain::new();
        let stored = chain.append_block(Block::new(1, transfer(10), GENESIS_HASH_HEX));
        assert_eq!(
            stored.hash().to_hex(),
            "9f2ee6cab0c61c99374552e0798eceabe4634f4fdc299af0d64385c9b6a35a89"
        );
    }

    #[test]
    fn test_append_ignores_caller_nonce() {
        let mut chain = Blockchain::new();
        let stored = chain.append_block(Block::with_nonce(1, transfer(1), "X", 77));
        assert_eq!(stored.nonce(), 1);
    }

    #[test]
    fn test_n_appends() {
        let mut chain = Blockchain::new();
        let n = 10u64;
        for i in 0..n {
            chain.append_block(Block::new(i + 1, transfer(i), "X"));
        }

        assert_eq!(chain.len(), n as usize + 1);
        let nonces: Vec<u64> = chain.blocks().iter().map(Block::nonce).collect();
        assert_eq!(nonces, (0..=n).collect::<Vec<_>>());

        for pair in chain.blocks().windows(2) {
            assert_eq!(pair[1].previous_hash(), pair[0].hash().to_hex());
        }
        for block in chain.blocks() {
            assert_eq!(block.calculate_hash(), block.hash());
        }
        assert!(chain.verify().is_ok());
    }

    #[test]
    fn test_get_block() {
        let mut chain = Blockchain::new();
        chain.append_block(Block::new(1, transfer(1), "X"));

        assert!(chain.get_block(0).unwrap().is_genesis());
        assert_eq!(chain.get_block(1).unwrap().nonce(), 1);
        assert!(chain.get_block(2).is_none());
    }

    #[test]
    fn test_verify_detects_hash_mismatch() {
        let mut chain = Blockchain::new();
        chain.append_block(Block::new(1, transfer(1), "X"));
        chain.append_block(Block::new(2, transfer(2), "X"));

        // Same linkage, different payload, stale hash.
        let mut forged = chain.blocks[1].clone();
        forged.tamper_transactions(|txs| txs[0].amount = 999);
        tamper(&mut chain, 1, forged);

        assert_eq!(chain.verify(), Err(ChainError::HashMismatch { index: 1 }));
    }

    #[test]
    fn test_verify_detects_broken_link() {
        let mut chain = Blockchain::new();
        chain.append_block(Block::new(1, transfer(1), "X"));
        chain.append_block(Block::new(2, transfer(2), "X"));

        // Internally consistent block that points at the wrong parent.
        tamper(&mut chain, 2, Block::with_nonce(2, transfer(2), "X", 2));

        assert_eq!(chain.verify(), Err(ChainError::BrokenLink { index: 2 }));
    }

    #[test]
    fn test_verify_detects_nonce_mismatch() {
        let mut chain = Blockchain::new();
        chain.append_block(Block::new(1, transfer(1), "X"));
        let parent = chain.blocks[0].hash().to_hex();
        tamper(&mut chain, 1, Block::with_nonce(1, transfer(1), parent, 5));

        assert_eq!(
            chain.verify(),
            Err(ChainError::NonceMismatch {
                index: 1,
                expected: 1,
                got: 5
            })
        );
    }

    #[test]
    fn test_verify_detects_bad_genesis() {
        let mut chain = Blockchain::new();
        tamper(&mut chain, 0, Block::new(3, Vec::new(), "0"));
        assert_eq!(chain.verify(), Err(ChainError::InvalidGenesis));
    }

    #[test]
    fn test_stats() {
        let mut chain = Blockchain::new();
        chain.append_block(Block::new(1, transfer(1), "X"));
        chain.append_block(Block::new(
            2,
            vec![
                Transaction::new("Bob", "Carol", 2),
                Transaction::new("Carol", "Dave", 3),
            ],
            "X",
        ));

        let stats = chain.stats();
        assert_eq!(stats.length, 3);
        assert_eq!(stats.latest_nonce, 2);
        assert_eq!(stats.latest_hash, chain.latest_block().hash());
        assert_eq!(stats.total_transactions, 3);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ChainError::BrokenLink { index: 3 }.to_string(),
            "block 3 previous_hash does not match block 2"
        );
    }
}
