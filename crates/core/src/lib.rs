//! Core primitives for hashchain.
//!
//! This crate provides the fundamental types of the chain:
//! - SHA-256 hashing
//! - Transactions
//! - Blocks
//! - The canonical encoding that feeds block hashes

pub mod block;
pub mod encoding;
pub mod hash;
pub mod transaction;

// Re-export commonly used types at the crate root
pub use block::{Block, BlockError, GENESIS_HASH_HEX, GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP};
pub use encoding::{block_hash, block_preimage, encode_transactions};
pub use hash::{sha256, Hash};
pub use transaction::{ParseTransactionError, Transaction};
