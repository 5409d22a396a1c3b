use anyhow::Result;
use tracing::info;

use address_book::{args, config, logging};
use persistence::AddressBookRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let filter = args::parse_filter(std::env::args().skip(1))?;

    let config = config::Config::load()?;
    logging::init_logging(&config.logging);

    info!("Starting address-book v{}", env!("CARGO_PKG_VERSION"));

    let repo = AddressBookRepository::connect(&config.database).await?;
    persistence::metrics::record_pool_metrics(repo.pool());

    let records = repo.get(&filter).await?;
    info!(count = records.len(), "fetched address book records");

    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }

    Ok(())
}
