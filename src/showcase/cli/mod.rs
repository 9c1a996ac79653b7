//! # CLI Layer
//!
//! This module is **one possible UI client** for showcase. It is the only place in the
//! codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Sets up logging
//!
//! ## Structure
//!
//! - `setup`: clap definitions for the binary and for shell lines
//! - `commands`: `run()`, context setup and per-command handlers
//! - `shell`: the line-oriented interactive session
//! - `render`: turns a `CmdResult` into terminal output
//! - `logging`: tracing subscriber setup

pub mod commands;
mod logging;
mod render;
mod setup;
mod shell;
