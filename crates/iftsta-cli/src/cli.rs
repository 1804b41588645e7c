//! Command-line arguments for `iftsta`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use iftsta_cli::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "iftsta",
    version,
    about = "Decode EDIFACT IFTSTA transport status messages into consignment records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More output with -v/-vv, less with -q.
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log line format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode one or more IFTSTA message files.
    Decode(DecodeArgs),
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Message files, decoded in the order given.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// How to print the decoded documents.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Logging settings implied by the global flags.
    ///
    /// `RUST_LOG` only applies when no `-v`/`-q` flag was given.
    pub fn log_config(&self) -> LogConfig {
        let ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig::default()
            .with_level(self.verbosity.tracing_level_filter())
            .with_env_filter(!self.verbosity.is_present())
            .with_format(self.log_format.into())
            .with_timestamps(self.log_timestamps)
            .with_ansi(ansi)
            .with_log_file(self.log_file.clone())
    }
}
