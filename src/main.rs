use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::info;

use fruitapp::config::Config;
use fruitapp::repository::FruitRepository;
use fruitapp::stats::active_and_completed_stats;
use fruitapp::storage::LocalStore;
use fruitapp::{logger, SimulatedNetworkDataSource};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    let local = Arc::new(LocalStore::new(&config.database.url).await?);
    let network = Arc::new(SimulatedNetworkDataSource::new(Duration::from_millis(
        config.network.service_latency_ms,
    )));
    let repository = FruitRepository::new(local, network);

    // Pull the seed data from the simulated backend, then exercise the
    // repository once so the demo shows the full write path.
    let fruits = repository.get_fruits(true).await?;
    info!("Fetched {} fruits from the backend", fruits.len());
    for fruit in &fruits {
        println!("- [{}] {} ({})", if fruit.is_completed { "x" } else { " " }, fruit.title_for_list(), fruit.category);
    }

    let fruit_id = repository.create_fruit("Buy milk", "grocery", "2%").await?;
    repository.complete_fruit(&fruit_id).await?;

    let fruits = repository.get_fruits(false).await?;
    let stats = active_and_completed_stats(&fruits);
    println!(
        "{} fruits: {:.0}% active, {:.0}% completed",
        fruits.len(),
        stats.active_fruits_percent,
        stats.completed_fruits_percent
    );
    println!("{}", serde_json::to_string_pretty(&fruits)?);

    // Let the pending mirror jobs land before exiting.
    repository.flush_mirror().await;

    Ok(())
}
