//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod append;
mod block;
mod demo;
mod genesis;
mod hash;

/// How commands render blocks.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the genesis block
    Genesis,
    /// Append blocks to the process-wide chain and print it
    Append(append::AppendArgs),
    /// Compute a block hash without touching the chain
    Hash(hash::HashArgs),
    /// Walk through the shared-chain behaviour step by step
    Demo,
}

pub fn run(cmd: Commands, output: Output) -> Result<()> {
    match cmd {
        Commands::Genesis => genesis::run(output),
        Commands::Append(args) => append::run(args, output),
        Commands::Hash(args) => hash::run(args, output),
        Commands::Demo => demo::run(output),
    }
}
