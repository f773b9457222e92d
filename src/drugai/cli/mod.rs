//! # CLI Behavior
//!
//! This is **one possible UI client** for drugai, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Naked Execution (`drugai`)
//!
//! Running `drugai` with no arguments shows the first page of the catalog with
//! the configured default sort, same as `drugai models`.
//!
//! ## Page Size Follows the Terminal
//!
//! Terminals narrower than `narrow-below` columns get the narrow page size.
//! When stdout is not a terminal the width is unknown and the wide size is
//! used. `--page-size` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `print`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
