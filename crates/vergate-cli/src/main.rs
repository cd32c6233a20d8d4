mod check;
mod config;
mod gate;
mod output;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "vergate")]
#[command(about = "Validate resolved dependency versions against version rules")]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print failures
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single resolved version against a list of rules
    Check(check::CheckArgs),

    /// Validate every gate declared in vergate.toml
    Gate(gate::GateArgs),
}

fn init_logger(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose, args.quiet);

    match args.command {
        Commands::Check(check_args) => check::execute(check_args, args.quiet),
        Commands::Gate(gate_args) => gate::execute(gate_args, args.quiet),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
