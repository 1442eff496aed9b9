//! Mental Dojo Control - timed arithmetic drills in the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dojo_common::{DojoConfig, Mode};
use dojoctl::commands;
use dojoctl::errors::{exit_code_for, EXIT_SUCCESS};
use dojoctl::logging::{self, LogTarget};
use std::path::PathBuf;

// Version is embedded at build time
const VERSION: &str = env!("DOJO_VERSION");

#[derive(Parser)]
#[command(name = "dojoctl")]
#[command(about = "Mental Dojo - timed addition and subtraction drills", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Config file (default: $DOJO_CONFIG or <config dir>/dojo/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed random seed for reproducible problems
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a drill session (default)
    Play {
        /// Skip the lobby and start in this mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Show the curriculum
    Levels {
        /// Only show one mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    #[value(alias = "addition")]
    Add,
    #[value(alias = "subtraction")]
    Sub,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Add => Mode::Addition,
            ModeArg::Sub => Mode::Subtraction,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DojoConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Commands::Play { mode: None }) {
        Commands::Play { mode } => commands::play(&config, cli.seed, mode.map(Mode::from)),
        Commands::Levels { mode, json } => {
            logging::init(&config.log, LogTarget::Stderr);
            commands::levels(mode.map(Mode::from), json)
        }
        Commands::Config => {
            logging::init(&config.log, LogTarget::Stderr);
            commands::show_config(&config)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };
    std::process::exit(code);
}
