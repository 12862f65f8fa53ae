use std::io;

use anyhow::Context;

use gildedrose_fixture::config::DAYS_ENV;
use gildedrose_fixture::{FixtureConfig, default_stock, run};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let env_days = std::env::var(DAYS_ENV).ok();
    let config = FixtureConfig::resolve(std::env::args().skip(1), env_days.as_deref())
        .context("failed to read fixture configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, default_stock(), &mut out).context("failed to write daily report")?;

    Ok(())
}
