//! Roost CLI: command console for the roost object store.
//!
//! Three modes:
//! - **Shell mode**: `roost [flags] COMMAND...`: single command, exit
//! - **REPL mode**: `roost [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "create User" | roost`: line-by-line from stdin

mod commands;
mod config;
mod format;
mod repl;
mod state;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use roost_executor::Executor;
use tracing_subscriber::EnvFilter;

use commands::{build_cli, join_words};
use config::{CliConfig, LOG_ENV};
use format::OutputMode;
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();
    let verbose = matches.get_flag("verbose");

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    init_tracing(&config, verbose);

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let executor = Executor::open(config.store.clone());
    let mut state = SessionState::new(executor, mode);

    // Dispatch mode
    let result = if let Some(words) = matches.get_many::<String>("command") {
        let words: Vec<&String> = words.collect();
        repl::run_shell(&mut state, &join_words(&words), &mut io::stdout())
    } else if io::stdin().is_terminal() {
        repl::run_repl(&mut state)
    } else {
        repl::run_pipe(&mut state, io::stdin().lock(), &mut io::stdout())
    };

    if let Err(e) = result {
        eprintln!("(fatal) {:#}", e);
        process::exit(1);
    }
}

fn load_config(matches: &clap::ArgMatches) -> roost_core::Result<CliConfig> {
    let explicit = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = CliConfig::discover(explicit.as_deref())?;
    if let Some(file) = matches.get_one::<String>("file") {
        config.store.document = PathBuf::from(file);
    }
    Ok(config)
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
