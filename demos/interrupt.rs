//! # Example: interrupt
//!
//! Starts two long-running children and waits. Press Ctrl-C to see the
//! supervisor relay the interrupt to each child individually and still
//! collect every result before closing.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► spawn "sleep 600" twice
//!   ├─► [Ctrl-C]
//!   │     ├─► "Interrupt signal received"
//!   │     ├─► SIGINT → sleep (#1), sleep (#2)
//!   │     └─► both report "signal: 2 (SIGINT)"
//!   └─► "All processes were closed"
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example interrupt
//! ```

use procvisor::{CommandSpec, Config, Supervisor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let specs = vec![
        CommandSpec::parse("sleep 600")?,
        CommandSpec::parse("sleep 600")?,
    ];

    println!("press Ctrl-C to interrupt both children");
    Supervisor::new(Config::default()).run(specs).await?;
    Ok(())
}
