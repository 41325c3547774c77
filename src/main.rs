use anyhow::Result;

mod cli;
mod config;
mod gateways;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run().await
}
