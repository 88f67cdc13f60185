use std::process::exit;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    config::{DEFAULT_ROSTER_FILE, DEFAULT_ROSTER_TOML, Roster, load_roster_file},
    driver,
    error::Res,
    util::{enable_debug_logging, file_exists, init_logger, write_file},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every dispatch to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write a roster.toml with the demo roster
    Init,
    /// Run a roster file
    Run {
        /// Path to roster file
        #[arg(default_value = DEFAULT_ROSTER_FILE)]
        path: String,
    },
}

pub fn run() {
    let cli = Cli::parse();

    if let Err(err) = run_command(cli.command, cli.verbose) {
        println!("error: {}", err);
        exit(1);
    }
}

fn run_command(command: Option<Command>, verbose: bool) -> Res<()> {
    match command {
        None => {
            init_logger(verbose);
            print_roster(&Roster::demo());
            Ok(())
        }
        Some(Command::Init) => {
            init_logger(verbose);
            roster_init()
        }
        Some(Command::Run { path }) => {
            init_logger(verbose);
            let roster = load_roster_file(&path)?;
            if roster.options.debug_mode && !verbose {
                enable_debug_logging();
            }
            print_roster(&roster);
            Ok(())
        }
    }
}

fn print_roster(roster: &Roster) {
    for line in driver::run(roster) {
        println!("{}", line);
    }
}

fn roster_init() -> Res<()> {
    if file_exists(DEFAULT_ROSTER_FILE) {
        println!("File {} already exists", DEFAULT_ROSTER_FILE);
        return Ok(());
    }

    write_file(DEFAULT_ROSTER_FILE, DEFAULT_ROSTER_TOML)?;
    info!("Wrote default roster");
    println!("Created {}", DEFAULT_ROSTER_FILE);
    Ok(())
}
