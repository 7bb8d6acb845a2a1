// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hwbot - a homework review watcher for Telegram.
//!
//! This is the binary entry point for the hwbot poller.

use clap::{Parser, Subcommand};

mod check;
mod run;

/// Hwbot - a homework review watcher for Telegram.
#[derive(Parser, Debug)]
#[command(name = "hwbot", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the polling loop.
    Run,
    /// Run diagnostic checks against the hwbot environment.
    Check {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match hwbot_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            hwbot_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Run) => run::run_watch(config).await,
        Some(Commands::Check { plain }) => check::run_check(&config, plain).await,
        None => {
            println!("hwbot: use --help for available commands");
            return;
        }
    };

    if let Err(err) = result {
        eprintln!("hwbot: {err}");
        std::process::exit(1);
    }
}
