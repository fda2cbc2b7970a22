//! Append-only hash chain for hashchain.
//!
//! This crate provides:
//! - **Blockchain**: an ordered sequence of blocks seeded with genesis, where
//!   appending relinks each block to the current tip
//! - **SharedChain**: the single process-wide chain, created on first use
//! - **Verification**: a walk over the chain that reports tampering
//!
//! # Example
//!
//! ```rust
//! use hashchain_chain::Blockchain;
//! use hashchain_core::{Block, Transaction};
//!
//! let chain = Blockchain::instance();
//! let tip = chain.latest_block().hash();
//!
//! let block = Block::new(1, vec![Transaction::new("Alice", "Bob", 10)], "ignored");
//! let stored = chain.append_block(block);
//!
//! assert_eq!(stored.previous_hash(), tip.to_hex());
//! assert!(std::ptr::eq(chain, Blockchain::instance()));
//! assert!(chain.verify().is_ok());
//! ```

pub mod blockchain;
pub mod shared;

// Re-export commonly used types
pub use blockchain::{Blockchain, ChainError, ChainStats, Result, FIRST_NONCE};
pub use shared::SharedChain;
