//! `binay-landing` - render the landing page to a static HTML file.

use anyhow::{Context, Result};
use binay_landing::config::{DEFAULT_CONFIG_FILE, LandingConfig, Overrides};
use binay_landing::{content_json, image_refs, outbound_links, render_page, write_page};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "binay-landing")]
#[command(about = "Render the Binay Tech landing page to static HTML")]
#[command(version)]
struct Args {
    /// Config file (TOML); missing file means defaults
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the rendered page to disk (default)
    Render {
        /// Output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Output file name inside the output directory
        #[arg(long)]
        file_name: Option<String>,
        /// Print the page to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Print the content model as JSON
    Content,
    /// List outbound links and image sources for content checks
    Links,
}

fn init_logging(level: &str) {
    // stderr keeps stdout clean for `render --stdout` and `content`
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Render {
        out_dir: None,
        file_name: None,
        stdout: false,
    });

    let file_config = LandingConfig::load_from_path(&args.config)?;
    let from_file = file_config.is_some();

    let overrides = match &command {
        Command::Render {
            out_dir, file_name, ..
        } => Overrides {
            out_dir: out_dir.clone(),
            file_name: file_name.clone(),
            log_level: args.log_level.clone(),
        },
        _ => Overrides {
            log_level: args.log_level.clone(),
            ..Default::default()
        },
    };
    let config = file_config.unwrap_or_default().with_overrides(overrides);

    init_logging(&config.log_level);
    if from_file {
        debug!("Loaded config from {}", args.config.display());
    }
    debug!(?config, "Resolved configuration");

    let mut out = io::stdout().lock();
    match command {
        Command::Render { stdout: true, .. } => {
            out.write_all(render_page().as_bytes())?;
        }
        Command::Render { .. } => {
            let path = config.output_path();
            write_page(&path).with_context(|| format!("rendering into {}", path.display()))?;
            info!("Landing page written to {}", path.display());
        }
        Command::Content => {
            writeln!(out, "{}", content_json()?)?;
        }
        Command::Links => {
            for url in outbound_links() {
                writeln!(out, "link\t{url}")?;
            }
            for image in image_refs() {
                writeln!(out, "image\t{}\t{}x{}", image.src, image.width, image.height)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

/// Downstream closed the pipe (e.g. `binay-landing render --stdout | head`).
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[binay-landing] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_pipe_is_detected_through_context() {
        let err = anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe))
            .context("writing page");
        assert!(is_broken_pipe(&err));
    }

    #[test]
    fn other_io_errors_are_not_broken_pipe() {
        let err = anyhow::Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!is_broken_pipe(&err));
        assert!(!is_broken_pipe(&anyhow::anyhow!("Broken pipe")));
    }
}
