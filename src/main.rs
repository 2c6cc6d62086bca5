use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sshconf::cli::{self, Output, Settings, DEFAULT_KEY_NAME};
use sshconf::error::Result;

#[derive(Parser)]
#[command(name = "sshconf")]
#[command(author = "Oleg")]
#[command(version = "0.1.0")]
#[command(about = "Small and smart SSH configuration tool", long_about = None)]
struct Cli {
    /// ssh config file to read [default: ~/.ssh/config]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the keys [default: ~/.ssh]
    #[arg(long, global = true, value_name = "PATH")]
    key_dir: Option<PathBuf>,

    /// Output format for listings
    #[arg(long, global = true, value_enum, default_value_t = Output::Table)]
    format: Output,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show hosts from the ssh config
    ListHost,

    /// Show private keys in the key directory
    ListKey,

    /// Show keys or hosts
    List {
        /// What to list: key or host
        #[arg(default_value = "key")]
        object: String,
    },

    /// Create a new RSA key pair
    CreateKey {
        /// File name of the new key
        #[arg(long, default_value = DEFAULT_KEY_NAME)]
        key_name: String,

        /// Accepted for compatibility; existing keys are never overwritten
        #[arg(long, default_value_t = false, action = ArgAction::Set, value_name = "BOOL")]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli.config, cli.key_dir, cli.format)?;

    match cli.command {
        Commands::ListHost => cli::host::list(&settings),
        Commands::ListKey => cli::key::list(&settings),
        Commands::List { object } => cli::list(&settings, &object),
        Commands::CreateKey { key_name, force } => cli::key::create(&settings, &key_name, force),
    }
}
