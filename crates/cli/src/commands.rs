//! Clap command definition.
//!
//! The binary takes a handful of global flags and, optionally, the words of
//! one interpreter command to run in shell mode.

use clap::{Arg, ArgAction, Command};

/// Build the CLI definition.
pub fn build_cli() -> Command {
    Command::new("roost")
        .about("Command console for the roost object store")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("TOML config file (default: ./roost.toml if present)"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .help("Document path, overriding the config (default: file.json)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log at debug level on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .help("Run one command and exit, e.g. `roost create User`")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

/// Join shell words back into one command line.
///
/// The shell has already removed quotes, so a word containing whitespace is
/// quoted again to stay one argument. Words that carry their own quoting or
/// brackets (mapping literals, method-call syntax) are left as they are.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            let structured = word.contains(['"', '{', '[', '(']);
            if structured || !word.contains(char::is_whitespace) {
                word.to_string()
            } else {
                format!("\"{}\"", word.replace('\\', "\\\\"))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
