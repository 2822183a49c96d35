use anyhow::{Context, Result};

use holdcrypt_store::{config::Config, derived, types::Coin, AppStore, Subscribe};
use tokio::task::JoinSet;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let seed = config.load_seed()?;
    let store = AppStore::new(seed).context("Seed failed validation")?;

    let coin_count = derived("coin_count", store.coins(), |coins: &Vec<Coin>| coins.len());
    info!("{} coins in catalog", coin_count.get());

    let mut set = JoinSet::new();
    let mut page = store.page().subscribe();
    set.spawn(async move {
        while let Some(current) = page.recv().await {
            info!("Page is now {}", current);
        }
    });

    for holder in store.holders().get() {
        let holdings = store.holdings(&holder.name)?;
        info!(
            "{}: {} transaction(s) across {} coin(s)",
            holder.name,
            holder.transactions.len(),
            holdings.len()
        );
        for balance in holdings {
            info!("   {} ({}): {:.8}", balance.name, balance.symbol, balance.amount);
        }
    }

    let snapshot = serde_json::to_string_pretty(&store.snapshot())
        .context("Failed to serialize store snapshot")?;
    println!("{snapshot}");

    drop(store);
    while let Some(res) = set.join_next().await {
        if let Err(e) = res {
            warn!("Task panicked: {:?}", e);
        }
    }
    Ok(())
}
