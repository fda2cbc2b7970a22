//! hashchain CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hashchain")]
#[command(about = "A toy append-only hash chain", long_about = None)]
struct Cli {
    /// Print blocks as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log chain operations (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

/// Default log level for a given number of `-v` flags.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let default = default_level(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = commands::Output { json: cli.json };

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd, output) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("hashchain - A toy append-only hash chain");
            println!("Run 'hashchain --help' for usage information.");
        }
    }
}
