//! List open tickets registered today.
//!
//! ```sh
//! BB_DEVELOPER_APPLICATION_KEY=... BB_BASIC_AUTH="Basic ..." \
//!     cargo run --example list_tickets
//! ```

use bb_cobranca::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = BoletoClientBuilder::from_env()?.verbose(true).build()?;

    let today = chrono::Local::now().format("%d.%m.%Y").to_string();
    let filters = ListingFilters::new().with("dataInicioRegistro", today);

    let response = client
        .tickets()
        .list("A", 452, 123873, &filters)
        .await?
        .into_result()?;

    let tickets: serde_json::Value = response.json()?;
    println!("Tickets: {}", serde_json::to_string_pretty(&tickets)?);
    Ok(())
}
