//! # coming-soon
//!
//! Renders the Coming Soon placeholder page to stdout or to a file.
//!
//! ```bash
//! coming-soon render > index.html
//! coming-soon render --fragment
//! coming-soon build --out-dir dist --json
//! coming-soon css
//! ```

use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use coming_soon_page::styles::page_stylesheet;
use coming_soon_page::{render_page, render_placeholder};
use coming_soon_site::{SiteConfig, write_page};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "coming-soon")]
#[command(about = "Render the Coming Soon placeholder page")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rendered page to stdout
    Render {
        /// Print only the placeholder markup, without <html>/<head>
        #[arg(long)]
        fragment: bool,

        /// Config file (default: ./coming-soon.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the rendered page into an output directory
    Build {
        /// Output directory (overrides [build].out_dir)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output file name (overrides [build].file_name)
        #[arg(long)]
        file_name: Option<String>,

        /// Config file (default: ./coming-soon.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON summary of the written file to stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the compiled stylesheet
    Css,
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(explicit: Option<PathBuf>) -> Result<SiteConfig> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = SiteConfig::resolve(explicit.as_deref(), &cwd)?;
    Ok(config)
}

/// Write `text` plus a newline; a reader that hung up early is not an error.
fn write_line<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    let written = out
        .write_all(text.as_bytes())
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush());
    match written {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn print_stdout(text: &str) -> Result<()> {
    write_line(&mut std::io::stdout().lock(), text).context("Failed to write to stdout")
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { fragment, config } => {
            // an explicit --config must be valid even when only the fragment is printed
            let config = load_config(config)?;
            let html = if fragment {
                render_placeholder()
            } else {
                render_page(&config.page)
            };
            print_stdout(&html)
        }
        Command::Build {
            out_dir,
            file_name,
            config,
            json,
        } => {
            let config = load_config(config)?;
            let out_dir = out_dir.unwrap_or(config.build.out_dir);
            let file_name = file_name.unwrap_or(config.build.file_name);

            let summary = write_page(&config.page, &out_dir, &file_name)
                .with_context(|| format!("Build into {} failed", out_dir.display()))?;

            if json {
                let body = serde_json::to_string_pretty(&summary)
                    .context("Failed to serialize build summary")?;
                print_stdout(&body)?;
            }
            Ok(())
        }
        Command::Css => print_stdout(&page_stylesheet()),
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting coming-soon v{}", env!("CARGO_PKG_VERSION"));

    run(args.command)
}
