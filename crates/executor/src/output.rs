//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant; formatting for the
//! terminal is left to the front end.

use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// ```text
/// match executor.execute_line("count User")? {
///     Output::Count(n) => println!("{n}"),
///     _ => unreachable!("count always returns Count"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Nothing to print (update, destroy, blank line)
    Unit,

    /// Id of a freshly created entity
    Id(String),

    /// `[Type] (id) {...}` form of one entity
    Rendered(String),

    /// Rendered form of every matching entity
    RenderedList(Vec<String>),

    /// Number of matching entities
    Count(u64),

    /// The interpreter should stop
    Quit {
        /// Print a newline before leaving (end of input)
        trailing_newline: bool,
    },
}
