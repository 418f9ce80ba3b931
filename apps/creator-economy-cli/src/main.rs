use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use commands::CommandContext;
use config::CliConfig;
use error::CliResult;

#[derive(Parser)]
#[command(name = "creator-economy")]
#[command(about = "Creator economy CLI - publish content and split tips on Solana")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/creator-economy/config.yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Solana RPC URL, overrides the config file
    #[arg(short, long, global = true)]
    rpc_url: Option<String>,

    /// Signing keypair file, overrides the config file
    #[arg(short, long, global = true)]
    keypair: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the platform record; the signing keypair becomes its authority
    InitPlatform {
        /// Account receiving the platform fee from every tip
        #[arg(long)]
        treasury: String,

        /// Size of each content's early supporter roster
        #[arg(long, default_value = "10")]
        early_supporter_limit: u16,

        /// Share of each tip paid to early supporters once the roster is full
        #[arg(long, default_value = "1000")]
        early_supporter_rate_bps: u16,

        /// Share of each tip paid to the treasury
        #[arg(long, default_value = "200")]
        platform_fee_rate_bps: u16,
    },

    /// Create the signing creator's ledger (no-op if it exists)
    CreateLedger,

    /// Publish content as the signing creator
    Publish {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,
    },

    /// Tip content from the signing keypair
    Tip {
        content_id: u64,

        /// Amount in lamports
        amount: u64,
    },

    /// Show what a tip would pay each party, without sending it
    PreviewTip {
        content_id: u64,

        /// Amount in lamports
        amount: u64,
    },

    /// Show the platform configuration and content counter
    ShowPlatform,

    /// Show a content record and its early supporters
    ShowContent { content_id: u64 },

    /// List content records, newest first
    ListContent {
        /// Only content published by this creator
        #[arg(long)]
        creator: Option<String>,
    },

    /// Show a creator's ledger (defaults to the signing keypair)
    ShowCreator { creator: Option<String> },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(cli.rpc_url, cli.keypair);
    let ctx = CommandContext::new(config)?;

    match cli.command {
        Commands::InitPlatform {
            treasury,
            early_supporter_limit,
            early_supporter_rate_bps,
            platform_fee_rate_bps,
        } => {
            commands::init_platform::execute(
                &ctx,
                treasury,
                early_supporter_limit,
                early_supporter_rate_bps,
                platform_fee_rate_bps,
            )
            .await
        }

        Commands::CreateLedger => commands::create_ledger::execute(&ctx).await,

        Commands::Publish { title, description } => {
            commands::publish::execute(&ctx, title, description).await
        }

        Commands::Tip { content_id, amount } => {
            commands::tip::execute(&ctx, content_id, amount).await
        }

        Commands::PreviewTip { content_id, amount } => {
            commands::preview_tip::execute(&ctx, content_id, amount).await
        }

        Commands::ShowPlatform => commands::show_platform::execute(&ctx).await,

        Commands::ShowContent { content_id } => {
            commands::show_content::execute(&ctx, content_id).await
        }

        Commands::ListContent { creator } => commands::list_content::execute(&ctx, creator).await,

        Commands::ShowCreator { creator } => commands::show_creator::execute(&ctx, creator).await,
    }
}
