use anyhow::Context;

use fruitstock_core::{AggregateRoot, Event};
use fruitstock_demo::{DemoConfig, script};
use fruitstock_inventory::FruitStock;

fn main() -> anyhow::Result<()> {
    fruitstock_observability::init();

    let config = DemoConfig::from_env()?;
    let mut stock = FruitStock::seeded(config.seed);
    tracing::info!(fruits = stock.len(), "stock seeded");

    let stdout = std::io::stdout();
    let events = script::run(&mut stock, &mut stdout.lock()).context("failed to write demo output")?;

    for event in &events {
        tracing::debug!(
            event_type = event.event_type(),
            schema_version = event.version(),
            ?event,
            "event applied"
        );
    }

    tracing::info!(events = stock.version(), remaining = stock.len(), "demo finished");
    Ok(())
}
