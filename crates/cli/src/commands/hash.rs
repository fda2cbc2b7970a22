//! Compute a block hash offline.

use super::Output;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use hashchain_core::{block_preimage, Block, Transaction};

#[derive(Args)]
pub struct HashArgs {
    /// Block timestamp
    #[arg(short = 's', long, default_value = "0")]
    timestamp: u64,

    /// Transaction as SENDER:RECEIVER:AMOUNT (repeatable)
    #[arg(short, long = "tx")]
    transactions: Vec<Transaction>,

    /// Previous block hash
    #[arg(short, long, default_value = "0")]
    prev: String,

    /// Block nonce
    #[arg(short, long, default_value = "0")]
    nonce: u64,

    /// Also print the hash preimage
    #[arg(long)]
    preimage: bool,
}

pub fn run(args: HashArgs, output: Output) -> Result<()> {
    let block = Block::with_nonce(args.timestamp, args.transactions, args.prev, args.nonce);

    if output.json {
        let mut json = serde_json::json!({ "hash": block.hash() });
        if args.preimage {
            json["preimage"] = preimage_of(&block).into();
        }
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if args.preimage {
        println!("  Preimage: {}", preimage_of(&block).bright_black());
    }
    println!("  Hash:     {}", block.hash().to_hex().bright_yellow());
    Ok(())
}

fn preimage_of(block: &Block) -> String {
    block_preimage(
        block.timestamp(),
        block.transactions(),
        block.previous_hash(),
        block.nonce(),
    )
}
