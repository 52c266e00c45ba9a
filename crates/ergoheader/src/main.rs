//! ergoheader - Adaptive site header toolkit

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ergoheader_core::{parse_script, resolve_site_config, SiteConfig, Simulation};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ergoheader",
    version,
    about = "Adaptive site header: render markup, replay interactions, emit styles",
    long_about = "Tooling for the Ergodicity Advantage site header.\n\
                  \n\
                  The header collapses into a minimized logo badge once the reader scrolls\n\
                  past the first screen, and comes back when they scroll up or hover it.\n\
                  \n\
                  Examples:\n\
                    ergoheader render --slug notes/kelly     # Header markup for a page\n\
                    ergoheader render --part all             # Header, title and footer\n\
                    ergoheader simulate session.txt          # Replay an event script\n\
                    ergoheader simulate session.txt --json   # Frames as JSON\n\
                    ergoheader css > header.css              # Theme variables + header rules\n\
                    ergoheader config                        # Effective configuration\n\
                  \n\
                  Environment Variables:\n\
                    ERGOHEADER_CONFIG                # Path to ergoheader.toml\n\
                    ERGOHEADER_NO_COLOR              # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                         # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to config file (default: ./ergoheader.toml, then user config dir)
    #[arg(long, global = true, env = "ERGOHEADER_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "ERGOHEADER_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render component markup to stdout
    Render {
        /// Slug of the page the markup is for
        #[arg(long, default_value = "index")]
        slug: String,
        /// Component to render: header, title, footer or all
        #[arg(long, default_value = "header")]
        part: String,
    },
    /// Replay an event script through the header and menu controllers
    Simulate {
        /// Script file (one command per line)
        script: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print theme variables and header stylesheet
    Css,
    /// Print the effective configuration
    Config {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_site_config(cli.config.as_deref())
        .context("Failed to load ergoheader configuration")?;

    match cli.command {
        Command::Render { slug, part } => run_render(&config, &slug, &part)?,
        Command::Simulate { script, json } => run_simulate(&config, script, json, cli.no_color)?,
        Command::Css => print!("{}", ergoheader_web::stylesheet(&config)),
        Command::Config { json } => println!("{}", cli::format_config(&config, json)?),
    }

    Ok(())
}

fn run_render(config: &SiteConfig, slug: &str, part: &str) -> Result<()> {
    let part = cli::parse_part(part)?;
    println!("{}", ergoheader_web::render::render_part(config, slug, part));
    Ok(())
}

fn run_simulate(config: &SiteConfig, script: PathBuf, json: bool, no_color: bool) -> Result<()> {
    let source = std::fs::read_to_string(&script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let steps = parse_script(&source)
        .with_context(|| format!("Failed to parse script {}", script.display()))?;

    if steps.is_empty() {
        return Err(cli::CliError::EmptyScript {
            path: script.display().to_string(),
        }
        .into());
    }

    tracing::debug!(steps = steps.len(), "replaying script");
    let frames = Simulation::run(config.header, &steps);
    println!("{}", cli::format_frames(&frames, json, no_color)?);
    Ok(())
}
