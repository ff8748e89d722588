mod archive;
mod cli;
mod commands;
mod config;
mod error;
mod mcp;
mod pdf;
mod run;
mod sequence;
mod size;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::SplitConfig;
use sequence::NamingConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Split {
            path,
            ranges,
            exclusions,
            prefix,
            suffix,
            zip_name,
            output_dir,
            json,
            dry_run,
        } => {
            let options = commands::split::SplitOptions {
                config: SplitConfig {
                    file: path,
                    ranges,
                    exclusions,
                    naming: NamingConfig { prefix, suffix },
                    zip_name,
                },
                output_dir,
                json,
                dry_run,
            };
            commands::split::run(&options).await?;
        }
    }

    Ok(())
}
