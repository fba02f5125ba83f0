use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gmaps_locate::cli::{parse_cmd, resolve_cmd};
use gmaps_locate::LocatorConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gmaps-locate",
    version,
    about = "Resolve Google Maps URLs to coordinates or address searches"
)]
struct Cli {
    /// Emit JSON lines instead of styled text
    #[arg(long, global = true)]
    json: bool,

    /// Suppress headers and notices
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Debug-level logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a URL the way a host search submission would
    Resolve {
        url: String,

        /// Skip short-link expansion (no network access)
        #[arg(long)]
        no_expand: bool,

        /// Expansion timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Show the extracted coordinate or address without network access
    Parse { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json {
        std::env::set_var("GMAPS_LOCATE_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("GMAPS_LOCATE_QUIET", "1");
    }
    if cli.no_color {
        std::env::set_var("GMAPS_LOCATE_NO_COLOR", "1");
    }

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("gmaps_locate={level}").parse()?),
        )
        .init();

    let mut config = LocatorConfig::from_env().context("invalid configuration")?;

    match cli.command {
        Command::Resolve {
            url,
            no_expand,
            timeout_ms,
        } => {
            if let Some(ms) = timeout_ms {
                config.expand_timeout_ms = ms;
            }
            resolve_cmd::run(&url, !no_expand, &config).await
        }
        Command::Parse { url } => parse_cmd::run(&url),
    }
}
