//! The process-wide chain.
//!
//! There is one [`SharedChain`] per process. It is created, genesis block
//! included, the first time [`Blockchain::instance`] runs and lives until the
//! process exits. Every later call hands back the same `&'static` reference.
//!
//! The mutex exists because a `static` has to be `Sync`. It serializes single
//! operations only: two calls in a row are not atomic, so callers that need
//! to read-then-append consistently should do so inside [`SharedChain::with_mut`].

use crate::blockchain::{Blockchain, ChainStats, Result};
use hashchain_core::Block;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::debug;

static CHAIN: OnceLock<SharedChain> = OnceLock::new();

/// Handle to the process-wide [`Blockchain`].
#[derive(Debug)]
pub struct SharedChain {
    inner: Mutex<Blockchain>,
}

impl Blockchain {
    /// The single chain of this process, created with its genesis block on
    /// first use.
    pub fn instance() -> &'static SharedChain {
        CHAIN.get_or_init(|| {
            debug!("creating process-wide chain");
            SharedChain {
                inner: Mutex::new(Blockchain::new()),
            }
        })
    }
}

impl SharedChain {
    // Every mutation is a single push plus counter bump, so a panic while the
    // lock is held cannot leave the chain half-updated.
    fn lock(&self) -> MutexGuard<'_, Blockchain> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a block; returns a copy of the block as stored.
    pub fn append_block(&self, block: Block) -> Block {
        self.lock().append_block(block).clone()
    }

    /// Copy of the most recently appended block.
    pub fn latest_block(&self) -> Block {
        self.lock().latest_block().clone()
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn next_nonce(&self) -> u64 {
        self.lock().next_nonce()
    }

    /// Copy of the block at `index`.
    pub fn get_block(&self, index: usize) -> Option<Block> {
        self.lock().get_block(index).cloned()
    }

    pub fn verify(&self) -> Result<()> {
        self.lock().verify()
    }

    pub fn stats(&self) -> ChainStats {
        self.lock().stats()
    }

    /// Run `f` with shared access to the whole chain under one lock.
    pub fn with<R>(&self, f: impl FnOnce(&Blockchain) -> R) -> R {
        f(&*self.lock())
    }

    /// Run `f` with exclusive access to the whole chain under one lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Blockchain) -> R) -> R {
        f(&mut *self.lock())
    }
}
