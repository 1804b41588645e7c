//! IFTSTA decoder CLI.

use anyhow::{Context, Result};
use clap::Parser;
use iftsta_cli::logging::init_logging;
use iftsta_cli::report::{decode_files, render_json};

mod cli;
mod summary;

use crate::cli::{Cli, Command, DecodeArgs, OutputFormatArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Decode(args) => match run_decode(&args) {
            Ok(has_errors) => i32::from(has_errors),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Decodes the requested files and prints them. Returns whether any file failed.
fn run_decode(args: &DecodeArgs) -> Result<bool> {
    let run = decode_files(&args.files);
    match args.format {
        OutputFormatArg::Table => print_summary(&run),
        OutputFormatArg::Json => {
            let json = render_json(&run).context("render decoded documents as JSON")?;
            println!("{json}");
        }
    }
    Ok(run.has_errors)
}
