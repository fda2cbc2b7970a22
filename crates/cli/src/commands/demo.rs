//! Walkthrough of the shared chain.

use super::{
    block::{print_block, print_chain},
    Output,
};
use anyhow::{ensure, Result};
use colored::Colorize;
use hashchain_chain::Blockchain;
use hashchain_core::{Block, Transaction, GENESIS_HASH_HEX};

fn step(text: &str) {
    println!("{}  {}", "✓".green().bold(), text);
}

pub fn run(output: Output) -> Result<()> {
    println!("{}", "Shared chain walkthrough".bold().cyan());
    println!();

    let chain = Blockchain::instance();
    ensure!(
        chain.latest_block().hash().to_hex() == GENESIS_HASH_HEX,
        "genesis hash differs from {}",
        GENESIS_HASH_HEX
    );
    step(&format!("Chain created with genesis {}", &GENESIS_HASH_HEX[..16]));

    let tx = Transaction::new("Alice", "Bob", 10);
    let stored = chain.append_block(Block::new(1, vec![tx.clone()], "made-up-parent"));
    ensure!(stored.previous_hash() == GENESIS_HASH_HEX, "block not linked to genesis");
    ensure!(stored.nonce() == 1, "first appended block should get nonce 1");
    step(&format!("Appended {} and the chain relinked it to genesis", tx));
    print_block(&stored, output)?;

    let again = Blockchain::instance();
    ensure!(std::ptr::eq(chain, again), "instance() returned a second chain");
    ensure!(again.len() == 2, "second lookup saw {} blocks", again.len());
    step("Second instance() call returned the same chain, still 2 blocks");

    chain.verify()?;
    step("Chain verified");

    chain.with(|c| print_chain(c.blocks(), output))
}
