//! # DrugAI CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument parsing
//! - `cli/commands.rs`: logging setup, context wiring, dispatch
//! - `cli/print.rs`: terminal output (pages, tags, plans, messages)
//!
//! Everything from `api.rs` inward is UI agnostic, so the CLI is responsible
//! for **all** user-facing concerns: terminal width, today's date, colors and
//! the exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
