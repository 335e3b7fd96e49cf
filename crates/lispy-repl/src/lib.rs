//! Interactive REPL for lispy.
//!
//! Provides:
//! - Line editing and command history via rustyline
//! - One-shot evaluation for scripting (`lispy -c '(+ 1 2)'`)
//! - Optional syntax tree dump and JSON output

pub mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use lispy::{evaluate_with, EvalContext, OverflowPolicy, ParseError, Parser, SyntaxNode, Value};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use serde::Serialize;

pub use cli::Cli;

const PROMPT: &str = "lispy> ";

/// Driver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplOptions {
    /// Print the syntax tree before each result
    pub print_ast: bool,
    /// Print results as JSON
    pub json: bool,
    /// Arithmetic overflow behavior
    pub overflow: OverflowPolicy,
    /// Parser nesting limit
    pub max_depth: usize,
    /// History file; `None` disables persistence
    pub history: Option<PathBuf>,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            print_ast: false,
            json: false,
            overflow: OverflowPolicy::Checked,
            max_depth: lispy::DEFAULT_MAX_DEPTH,
            history: None,
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ast: Option<&'a SyntaxNode>,
    value: Value,
}

/// Per-line state: parser and evaluation settings. Holds nothing between
/// lines.
#[derive(Debug, Clone)]
pub struct Repl {
    parser: Parser,
    ctx: EvalContext,
    print_ast: bool,
    json: bool,
}

impl Repl {
    /// Create a REPL from driver options.
    pub fn new(options: &ReplOptions) -> Self {
        Self {
            parser: Parser::with_max_depth(options.max_depth),
            ctx: EvalContext::with_overflow(options.overflow),
            print_ast: options.print_ast,
            json: options.json,
        }
    }

    /// Parse and evaluate one line.
    ///
    /// Returns `Ok(None)` for blank lines. Evaluation errors are part of the
    /// output; only parse failures (a [`ParseError`]) come back as `Err`.
    pub fn process_line(&self, line: &str) -> Result<Option<String>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let tree = self.parser.parse(line)?;
        let value = evaluate_with(&tree, &self.ctx);
        tracing::debug!(%value, "evaluated line");

        let output = if self.json {
            let out = JsonOutput {
                ast: self.print_ast.then_some(&tree),
                value,
            };
            serde_json::to_string(&out).context("Failed to encode result")?
        } else if self.print_ast {
            format!("{}{}", tree, value)
        } else {
            value.to_string()
        };
        Ok(Some(output))
    }
}

/// Render a driver error the way the REPL prints it.
///
/// Parse errors are shown with their input position.
pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ParseError>() {
        Some(parse_err) => format_parse_error(parse_err),
        None => format!("Error: {:#}", err),
    }
}

/// `<stdin>:1:<column>: error: <message>`
pub fn format_parse_error(err: &ParseError) -> String {
    match err.column() {
        Some(column) => format!("<stdin>:1:{}: error: {}", column, err),
        None => format!("<stdin>: error: {}", err),
    }
}

/// Evaluate a single line and print the result.
///
/// Exits with failure only when the line does not parse.
pub fn run_command(options: &ReplOptions, line: &str) -> ExitCode {
    let repl = Repl::new(options);
    match repl.process_line(line) {
        Ok(Some(output)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// Load REPL history, ignoring a missing file.
fn load_history(rl: &mut Editor<(), DefaultHistory>, history_path: Option<&Path>) {
    if let Some(path) = history_path {
        if let Err(e) = rl.load_history(path) {
            // Missing file is expected on first run
            let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
            if !is_not_found {
                tracing::warn!("Failed to load history: {}", e);
            }
        }
    }
}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: Option<&Path>) {
    if let Some(path) = history_path {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create history directory: {}", e);
            }
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("Failed to save history: {}", e);
        }
    }
}

/// Run the interactive REPL until end of input.
pub fn run(options: &ReplOptions) -> Result<()> {
    println!("Lispy Version {}", lispy::VERSION);
    println!("Press Ctrl+D to exit");
    println!();

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;
    let history_path = options.history.as_deref();
    load_history(&mut rl, history_path);

    let repl = Repl::new(options);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        tracing::warn!("Failed to add history entry: {}", e);
                    }
                }

                match repl.process_line(&line) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) => eprintln!("{}", format_error(&e)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, history_path);

    Ok(())
}
