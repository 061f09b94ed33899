//! Procvisor CLI binary.
//!
//! Thin boundary over the library: tokenizes each positional argument into a
//! [`CommandSpec`] (naive whitespace splitting, no quoting support) and hands
//! the batch to the [`Supervisor`]. Child failures are reported in the log
//! only; the exit status stays zero unless the supervisor itself failed to
//! start.

use clap::Parser;
use procvisor::{CommandSpec, Config, Supervisor};

#[derive(Parser)]
#[command(name = "procvisor")]
#[command(about = "Run commands in parallel with tagged, column-aligned output")]
#[command(version)]
struct Cli {
    /// Tag used for the supervisor's own log lines.
    #[arg(long, default_value = "parallel")]
    label: String,

    /// Commands to run, one string each, e.g. "sleep 5" "echo done".
    /// Split on whitespace; shell quoting is not interpreted.
    #[arg(required = true)]
    commands: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let specs = cli
        .commands
        .iter()
        .map(|raw| CommandSpec::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let cfg = Config {
        label: cli.label.into(),
        ..Config::default()
    };

    Supervisor::new(cfg).run(specs).await?;
    Ok(())
}
