//! CLI for pdftool: resolve run parameters, set up logging, run the pipeline.

mod pipeline;
mod prompt;

use anyhow::Result;
use clap::Parser;
use pdftool_core::config::{self, LoadedConfig, PdfToolConfig};
use pdftool_core::logging::{self, LogSettings};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use pipeline::{run_pipeline, RunParams};
use prompt::Prompter;

/// Download PDF files linked from a web page and convert them to TXT files.
#[derive(Debug, Parser)]
#[command(name = "pdftool", version)]
#[command(about = "Download PDF files present in URL and convert them to TXT files", long_about = None)]
#[command(after_help = "© Publico")]
pub struct Cli {
    /// The URL from which to download the PDF files.
    pub url: Option<String>,

    /// Ask for the URL, directory and delete confirmation instead of using flags.
    #[arg(short, long)]
    pub interactive: bool,

    /// The directory where the new files should be stored (default: current directory).
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Whether to delete all existing PDF & TXT files in the given directory (also `-rm`).
    #[arg(long)]
    pub delete: bool,

    /// Show debug output on the console.
    #[arg(short, long)]
    pub verbose: bool,

    /// Use this config file instead of ~/.config/pdftool/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Rewrites the single-dash `-rm` flag to `--delete`, up to a `--` terminator.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut seen_terminator = false;
    args.into_iter()
        .map(|arg| {
            if arg == OsStr::new("--") {
                seen_terminator = true;
            }
            if !seen_terminator && arg == OsStr::new("-rm") {
                OsString::from("--delete")
            } else {
                arg
            }
        })
        .collect()
}

impl Cli {
    /// Parameters taken from flags.
    pub fn flag_params(&self) -> RunParams {
        let dir = self.dir.as_deref().unwrap_or(Path::new(""));
        RunParams::new(self.url.as_deref(), dir, self.delete)
    }
}

/// Something about config loading worth logging once logging is up.
#[derive(Debug)]
pub(crate) enum ConfigNote {
    Created(PathBuf),
    Fallback(anyhow::Error),
}

/// Picks the run configuration. An explicit `--config` must load; the default
/// location falls back to built-in defaults when it cannot be used.
pub(crate) fn resolve_config<F>(
    explicit: Option<&Path>,
    load_default: F,
) -> Result<(PdfToolConfig, Option<ConfigNote>)>
where
    F: FnOnce() -> Result<LoadedConfig>,
{
    if let Some(path) = explicit {
        return Ok((config::load_from(path)?, None));
    }
    match load_default() {
        Ok(LoadedConfig { config, created }) => Ok((config, created.map(ConfigNote::Created))),
        Err(e) => Ok((PdfToolConfig::default(), Some(ConfigNote::Fallback(e)))),
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let (cfg, note) = resolve_config(cli.config.as_deref(), config::load_or_init)?;
    init_logging(&cfg, cli.verbose);
    match note {
        Some(ConfigNote::Created(path)) => {
            tracing::info!("created default config at {}", path.display())
        }
        Some(ConfigNote::Fallback(e)) => {
            tracing::warn!("using built-in config defaults: {:#}", e)
        }
        None => {}
    }
    tracing::debug!("loaded config: {:?}", cfg);

    let params = if cli.interactive {
        println!("\nLet me ask you a few questions and I promise I will make you happy! (◕ ‿ ◕)");
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter.ask_params()?
    } else {
        cli.flag_params()
    };
    tracing::debug!("run parameters: {:?}", params);

    println!("\nThanks dude, let me get to work now! ╭∩╮(･◡･)╭∩╮\n");
    run_pipeline(&params, &cfg)
}

fn init_logging(cfg: &PdfToolConfig, verbose: bool) {
    let settings = LogSettings {
        file: cfg.log_file.clone(),
        verbose,
    };
    if let Err(e) = logging::init_logging(&settings) {
        logging::init_logging_stderr(verbose);
        tracing::warn!("logging to console only: {:#}", e);
    }
}

#[cfg(test)]
mod tests;
