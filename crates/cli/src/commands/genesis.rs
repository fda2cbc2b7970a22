//! Show the genesis block.

use super::{block::print_block, Output};
use anyhow::{Context, Result};
use hashchain_chain::Blockchain;

pub fn run(output: Output) -> Result<()> {
    let genesis = Blockchain::instance()
        .get_block(0)
        .context("chain has no genesis block")?;
    print_block(&genesis, output)
}
