//! # CLI Module
//!
//! `storefront-plan`, a dry-run companion to the `storefront-load` binary.
//! The load test itself takes goose's command line (`--users`,
//! `--hatch-rate`, `--run-time`, `--host`, ...); this CLI only previews what
//! that run would send.
//!
//! ## Commands
//!
//! ### `table`
//!
//! ```bash
//! storefront-plan table
//! ```
//!
//! Prints each task's weight and expected share of traffic, plus the
//! resolved host and think time.
//!
//! ### `sample`
//!
//! ```bash
//! storefront-plan sample --count 100000 --seed 7 --show 5
//! ```
//!
//! Draws weighted selections, compares observed shares to expected ones and
//! prints the first requests it built.

mod commands;


pub use commands::{execute, run_cli, Cli, Commands};
