//! # storefront-load
//!
//! A [goose](https://docs.rs/goose) load test for the storefront backend's
//! user and product endpoints.
//!
//! ## Overview
//!
//! Each simulated user authenticates with HTTP Basic auth, computed once
//! when the user starts, then repeatedly runs a weighted task and sleeps a
//! random 1-3 seconds. goose owns scheduling, concurrency, the HTTP client
//! and metrics; this crate only declares what a user does.
//!
//! ## Architecture
//!
//! - **[`catalog`]** - Fixed sample pools (user ids, product ids, filters)
//! - **[`auth`]** - Basic-auth header and per-user session data
//! - **[`requests`]** - Pure request templates, one builder per task
//! - **[`tasks`]** - The weighted task table and its goose transactions
//! - **[`attack`]** - Scenario and `GooseAttack` assembly
//! - **[`plan`]** - Offline preview of the weighted task mix
//! - **[`config`]** - Host, credentials and think time from YAML and env
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `storefront-plan` preview command
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Goose as GooseAttack
//!     participant User as GooseUser
//!     participant Tasks as tasks::run_task
//!     participant Req as requests::*
//!     participant API as Storefront API
//!
//!     Goose->>User: launch (hatch rate)
//!     User->>User: init_session (on start)<br/>Authorization: Basic ...
//!     loop until run time elapses
//!         Goose->>Tasks: pick weighted transaction
//!         Tasks->>Req: build RequestTemplate
//!         Req-->>Tasks: method, path, body, auth?
//!         Tasks->>API: HTTP request
//!         API-->>Goose: status recorded in metrics
//!         User->>User: sleep 1-3s
//!     end
//! ```
//!
//! ## Running
//!
//! ```bash
//! storefront-load --host http://localhost:3000 -u20 -r5 -t2m
//! storefront-plan table
//! ```

pub mod attack;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod plan;
pub mod requests;
pub mod tasks;

pub use auth::{Credentials, Session};
pub use config::{ConfigError, LoadTestConfig};
pub use requests::RequestTemplate;
pub use tasks::{Task, TASKS};
