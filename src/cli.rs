use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{config::Config, gateways};

#[derive(Debug, Parser)]
#[command(version, about = "A crowdsourced map of food-rescue locations")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let enable_cors = args.enable_cors || cfg.webserver.enable_cors;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        frdb_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    frdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let geo_gw = gateways::geocoding_gateway(&cfg);

    frdb_webserver::run(
        connections,
        enable_cors,
        geo_gw,
        env!("CARGO_PKG_VERSION"),
    )
    .await;

    Ok(())
}
