mod controller;
mod ui;

use anyhow::Context;

use crate::ui::{launch, StartupConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = StartupConfig::default();
    if let Err(err) = launch(config) {
        tracing::error!(error = %err, "turtle graphics window failed to start");
        return Err(err).context("Turtle Graphics could not start");
    }

    Ok(())
}
