//! # Example: basic
//!
//! Runs two short commands in parallel and lets their tagged output
//! interleave in one log.
//!
//! Shows how to:
//! - Parse raw command strings into [`CommandSpec`]s
//! - Run them under a [`Supervisor`] with the default label
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► CommandSpec::parse("echo hello") / ("echo world")
//!   └─► Supervisor::run
//!         ├─► announce both processes
//!         ├─► tag their output: [echo#1] / [echo#2]
//!         └─► "All processes were closed"
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use procvisor::{CommandSpec, Config, Supervisor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let specs = vec![
        CommandSpec::parse("echo hello")?,
        CommandSpec::parse("echo world")?,
    ];

    Supervisor::new(Config::default()).run(specs).await?;
    Ok(())
}
