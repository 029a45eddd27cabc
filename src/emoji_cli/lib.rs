//! # emoji-cli Architecture
//!
//! emoji-cli looks up, searches and converts emoji using a bundled name-to-emoji
//! dataset. The binary is a thin shell: everything it does is reachable from this
//! library, which keeps the dispatcher testable without spawning processes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Captures arguments, resolves and validates commands      │
//! │  - Formats results, owns stdout/stderr and exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lookup Layer (lookup/)                                     │
//! │  - `EmojiLookup` trait: search, get, has, find, emojify,    │
//! │    unemojify, random                                        │
//! │  - `EmojiLibrary` over the bundled `Dataset`                │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: the lookup layer never prints
//!
//! From `lookup/` inward, code takes plain Rust arguments and returns
//! `Result<T, LookupError>`. It never writes to stdout/stderr and never exits the
//! process. The CLI layer decides how a lookup failure is reported: handlers catch
//! it and print a message, the process still exits 0.
//!
//! ## Exit codes
//!
//! | code | meaning                                              |
//! |------|------------------------------------------------------|
//! | 0    | success, usage, version, or a reported lookup failure |
//! | 1    | unknown command or unexpected error                  |
//! | 2    | wrong number of arguments for a command              |
//!
//! ## Module Overview
//!
//! - [`cli`]: argument capture, command table, handlers, output formatting
//! - [`config`]: runtime settings assembled from flags and environment
//! - [`error`]: `CliError` and `LookupError`
//! - [`lookup`]: the emoji-lookup library and bundled dataset
//! - [`model`]: the `Emoji` record shared by both layers

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
