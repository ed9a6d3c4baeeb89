use storefront::config::AppConfig;
use storefront::{init_logging, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();
    init_logging();

    println!("Storefront: homepage server");

    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    run_server(&config).await
}
