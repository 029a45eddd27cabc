//! # emoji-cli binary
//!
//! The binary is intentionally thin: argument capture, dispatch and rendering
//! live in [`emoji_cli::cli`]. This file only hands the exit code from
//! `cli::run()` to the operating system.

fn main() {
    std::process::exit(emoji_cli::cli::run());
}
