use std::io;

use solid_heroes::{narrate_all, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    narrate_all(stdout.lock())?;

    Ok(())
}
