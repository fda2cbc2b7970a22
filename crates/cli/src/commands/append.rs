//! Append blocks to the process-wide chain.

use super::{block::print_chain, Output};
use anyhow::{ensure, Context, Result};
use clap::Args;
use colored::Colorize;
use hashchain_chain::Blockchain;
use hashchain_core::{Block, Transaction};
use tracing::info;

#[derive(Args)]
pub struct AppendArgs {
    /// Transaction as SENDER:RECEIVER:AMOUNT (repeatable)
    #[arg(short, long = "tx")]
    transactions: Vec<Transaction>,

    /// Timestamp of the first appended block; later blocks count up from it
    #[arg(short = 's', long, default_value = "1")]
    timestamp: u64,

    /// Number of blocks to append
    #[arg(short, long, default_value = "1")]
    blocks: u64,

    /// Previous hash to claim (the chain replaces it on append)
    #[arg(short, long, default_value = "0")]
    prev: String,
}

pub fn run(args: AppendArgs, output: Output) -> Result<()> {
    ensure!(args.blocks > 0, "--blocks must be at least 1");

    let chain = Blockchain::instance();

    for i in 0..args.blocks {
        let timestamp = args
            .timestamp
            .checked_add(i)
            .context("timestamp overflow")?;
        let block = Block::new(timestamp, args.transactions.clone(), args.prev.as_str());
        let stored = chain.append_block(block);
        info!(nonce = stored.nonce(), hash = %stored.hash(), "block appended");

        if !output.json {
            println!(
                "{}  Appended block #{} {}",
                "✓".green().bold(),
                stored.nonce(),
                stored.hash().to_hex().bright_yellow()
            );
        }
    }

    chain.verify().context("chain failed verification")?;
    chain.with(|c| print_chain(c.blocks(), output))
}
