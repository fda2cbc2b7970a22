//! Block rendering shared by the commands.

use super::Output;
use anyhow::Result;
use colored::Colorize;
use hashchain_core::Block;

/// Print one block in full.
pub fn print_block(block: &Block, output: Output) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(block)?);
        return Ok(());
    }

    println!();
    println!("{}", "Block Information:".bold().cyan());
    println!();
    println!("  Nonce:        {}", block.nonce().to_string().bright_cyan());
    println!("  Hash:         {}", block.hash().to_hex().bright_yellow());
    println!("  Prev Hash:    {}", block.previous_hash().bright_black());
    println!(
        "  Timestamp:    {}",
        block.timestamp().to_string().bright_black()
    );
    println!(
        "  Transactions: {}",
        block.tx_count().to_string().bright_cyan()
    );
    println!();

    if block.tx_count() > 0 {
        println!("{}", "Transactions:".bold());
        println!();
        for (i, tx) in block.transactions().iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).bright_black(), tx);
        }
        println!();
    }

    Ok(())
}

/// Print a chain, one line per block.
pub fn print_chain(blocks: &[Block], output: Output) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(blocks)?);
        return Ok(());
    }

    println!();
    println!("{}", "Chain:".bold().cyan());
    println!();

    for block in blocks {
        println!(
            "  {} {} <- {} {}",
            format!("#{}", block.nonce()).bright_black(),
            block.hash().to_hex()[..16].bright_yellow(),
            short(block.previous_hash()).bright_black(),
            format!("({} txs)", block.tx_count()).bright_black()
        );
    }

    println!();
    Ok(())
}

/// First 16 characters of a hash-like string.
fn short(s: &str) -> &str {
    s.get(..16).unwrap_or(s)
}
