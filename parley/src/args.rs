use std::path::PathBuf;

use clap::Parser;
use parley_config::Config;

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "parley.toml";

/// Parley speech report generator
#[derive(Debug, Parser)]
#[command(
    name = "parley",
    about = "Report filler words, vocabulary, and grammar issues for a speech transcript"
)]
pub struct Args {
    /// Path to configuration file [default: parley.toml, if present]
    #[arg(short, long, env = "PARLEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Transcription result JSON; reads stdin when omitted or `-`
    #[arg(short, long, env = "PARLEY_INPUT")]
    pub input: Option<PathBuf>,

    /// Question the speaker was answering
    #[arg(short, long)]
    pub question: String,

    /// Log filter directives, e.g. `info` or `grammar=debug`
    #[arg(long, default_value = "info", env = "PARLEY_LOG")]
    pub log_filter: String,
}

impl Args {
    /// Configuration path in effect
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load the configuration
    ///
    /// An explicitly named file must exist. Built-in defaults apply only
    /// when no file was named and `parley.toml` is absent.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::load_or_default(&self.config_path()),
        }
    }

    /// Input path, or `None` for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
