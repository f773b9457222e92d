//! # DrugAI Architecture
//!
//! DrugAI is a **UI-agnostic model catalog library**. It answers one question
//! over a fixed catalog of published biomolecular AI models: given a tag, a
//! search term, a sort order, a page size and a page number, which records are
//! visible? Around that pipeline sit two thin clients for hosted services
//! (inference and subscription checkout) and the pricing table.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, owns the mutable view state            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns catalog, transport, credentials, in-flight guards   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns pipeline and service results into `CmdResult`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (pipeline/, catalog/, service/)                       │
//! │  - filter → sort → paginate over an immutable catalog       │
//! │  - Transport trait: HttpTransport / CannedTransport         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values and returns regular
//! Rust types. It never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; installing a subscriber is the binary's
//! business.
//!
//! The pipeline itself is pure: a [`pipeline::ViewState`] and a
//! [`catalog::Catalog`] in, a [`pipeline::PageResult`] out. "Today" is an
//! argument so that trending scores are reproducible.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests beside the code. Services are tested
//!    against [`service::memory::CannedTransport`] and
//!    [`auth::StaticCredentials`], never a live endpoint.
//! 2. **API** (`api.rs`): dispatch tests.
//! 3. **CLI**: end-to-end tests in `tests/` driving the built binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`pipeline`]: Filter, sort, paginate and the view state
//! - [`catalog`]: The validated, read-only record collection
//! - [`model`]: `ModelRecord` and like-count parsing
//! - [`layout`]: Width-dependent page sizes
//! - [`service`]: Hosted inference and checkout clients
//! - [`auth`]: Credential provider capability
//! - [`pricing`]: Plans and subscribe routing
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod auth;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod pricing;
pub mod service;
