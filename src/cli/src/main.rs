//! Command line driver for the token ledger.

use anyhow::Result;
use cli::{accounts, config::TokenConfig, demo, run};
use colored::Colorize;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the CLI.
#[derive(Debug, StructOpt)]
#[structopt(name = "token", about = "In-process fungible token ledger")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: Command,
}

/// Subcommands for the CLI.
#[derive(Debug, StructOpt)]
enum Command {
    /// Replay the reference deployment: mint, transfer and print balances
    #[structopt(name = "demo")]
    Demo,

    /// Apply a JSON script of ledger messages to a fresh ledger
    #[structopt(name = "run")]
    Run {
        /// Path to the script
        #[structopt(long, parse(from_os_str))]
        script: PathBuf,

        /// Stop at the first rejected message
        #[structopt(long)]
        strict: bool,
    },

    /// Print the deterministic signer addresses
    #[structopt(name = "accounts")]
    Accounts {
        /// Number of signers to print
        #[structopt(long, default_value = "3")]
        count: u32,
    },

    /// Print the configured token metadata
    #[structopt(name = "info")]
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let opt = Opt::from_args();
    let config = TokenConfig::resolve(opt.config.as_deref())?;

    match opt.cmd {
        Command::Demo => {
            let report = demo::run(&config).await?;
            let info = &report.info;
            println!(
                "{} name: {}, symbol: {}, decimals: {}, totalSupply: {}",
                "Token:".green(),
                info.name,
                info.symbol,
                info.decimals,
                info.total_supply
            );
            for (i, (account, balance)) in report.balances.iter().enumerate() {
                println!(
                    "Balance of account[{}] {} is {} decimals units",
                    i, account, balance
                );
            }
        }
        Command::Run { script, strict } => {
            let report = run::run(&config, &script, strict).await?;
            for outcome in &report.outcomes {
                match &outcome.result {
                    Ok(()) => println!("{} #{} {}", "ok".green(), outcome.index, outcome.msg),
                    Err(e) => println!(
                        "{} #{} {} ({})",
                        e.kind().red(),
                        outcome.index,
                        outcome.msg,
                        e
                    ),
                }
            }
            println!("{} {}", "Total supply:".green(), report.info.total_supply);
            for (account, balance) in &report.holders {
                println!("  {} {}", account, balance);
            }
            if report.rejected() > 0 {
                println!("{} {}", "Rejected messages:".yellow(), report.rejected());
            }
        }
        Command::Accounts { count } => {
            for (i, account) in accounts::signers(count).iter().enumerate() {
                println!("account[{}] {}", i, account);
            }
        }
        Command::Info => {
            let owner = config.owner_or(accounts::signer(0));
            println!(
                "{} {} ({}), {} decimals, owner {}",
                "Token:".green(),
                config.name,
                config.symbol,
                config.decimals,
                owner
            );
        }
    }

    Ok(())
}
