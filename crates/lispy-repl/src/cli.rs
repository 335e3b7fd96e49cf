//! Command-line arguments

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use lispy::{OverflowPolicy, DEFAULT_MAX_DEPTH};

use crate::ReplOptions;

/// Upper bound for `--max-depth`; deeper trees risk overflowing the stack.
pub const MAX_DEPTH_LIMIT: u64 = 4096;

/// Evaluate prefix arithmetic such as `(+ 1 (* 2 3))`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "lispy", version, about)]
pub struct Cli {
    /// Evaluate EXPR, print the result and exit
    #[arg(short = 'c', long = "command", value_name = "EXPR")]
    pub command: Option<String>,

    /// Print the syntax tree before each result
    #[arg(long)]
    pub print_ast: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Wrap on arithmetic overflow instead of reporting an invalid number
    #[arg(long)]
    pub wrapping: bool,

    /// Maximum parenthesis nesting accepted by the parser
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DEPTH_LIMIT)
    )]
    pub max_depth: usize,

    /// History file (defaults to the user data directory)
    #[arg(long, value_name = "PATH", conflicts_with = "no_history")]
    pub history: Option<PathBuf>,

    /// Do not load or save history
    #[arg(long)]
    pub no_history: bool,
}

impl Cli {
    /// Turn parsed arguments into REPL options.
    pub fn options(&self) -> ReplOptions {
        let history = if self.no_history {
            None
        } else {
            self.history.clone().or_else(default_history_path)
        };
        ReplOptions {
            print_ast: self.print_ast,
            json: self.json,
            overflow: if self.wrapping {
                OverflowPolicy::Wrapping
            } else {
                OverflowPolicy::Checked
            },
            max_depth: self.max_depth,
            history,
        }
    }
}

/// `<data dir>/lispy/history.txt`, when the platform has a data directory.
pub fn default_history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.data_dir().join("lispy").join("history.txt"))
}
