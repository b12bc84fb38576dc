//! gh-sweep CLI

mod cli;

use anstream::println;
use clap::Parser;
use cli::style::Stylize;
use gh_sweep::types::SweepOptions;
use tracing_subscriber::EnvFilter;

/// Delete local branches whose GitHub pull requests are all merged
#[derive(Parser, Debug)]
#[command(name = "gh-sweep", version, about)]
struct Cli {
    /// Report which branches would be deleted without deleting them
    #[arg(long)]
    safe: bool,

    /// Also delete branches whose pull requests were closed without merging
    #[arg(long)]
    force: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    const fn options(&self) -> SweepOptions {
        SweepOptions {
            safe: self.safe,
            force: self.force,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gh_sweep=debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));
    init_tracing(cli.verbose);

    // Failures are reported, not signalled through the exit code
    if let Err(e) = cli::sweep::run_sweep(cli.options()).await {
        println!("{}", format!("Error: {e}").error());
    }
}
