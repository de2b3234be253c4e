mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::FmtSubscriber;

use crate::{
    commands::InputArgs,
    config::{DEFAULT_LOG_LEVEL, LogLevel, TextEncoding},
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[arg(long, value_enum, global = true, default_value_t = DEFAULT_LOG_LEVEL)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a signed or unsigned transaction and print it as JSON
    DecodeTx {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Decode a bare message (the signed bytes)
    DecodeMessage {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Decode stake account data
    Stake {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Decode vote account data
    Vote {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Build and sign a system transfer, print the wire bytes
    Transfer {
        /// Base58 64-byte keypair of the sender, who also pays fees
        #[arg(long)]
        keypair: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        lamports: u64,
        /// Recent blockhash or durable nonce value
        #[arg(long)]
        blockhash: String,
        #[arg(long, value_enum, default_value_t = TextEncoding::Base64)]
        output_encoding: TextEncoding,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    match cli.command {
        Commands::DecodeTx { input } => commands::decode_tx(&input)?,
        Commands::DecodeMessage { input } => commands::decode_message(&input)?,
        Commands::Stake { input } => commands::stake(&input)?,
        Commands::Vote { input } => commands::vote(&input)?,
        Commands::Transfer {
            keypair,
            to,
            lamports,
            blockhash,
            output_encoding,
        } => commands::transfer(&keypair, &to, lamports, &blockhash, output_encoding)?,
    }

    Ok(())
}
