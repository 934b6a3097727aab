//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use rolodex_api::{app, AppState};
use rolodex_core::logging::{self, Profile};
use rolodex_core::PersonService;
use rolodex_store::SqlitePersonStore;
use tracing::info;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Path to the SQLite database file (created on first run)
    #[arg(long, default_value = "rolodex.db")]
    pub db: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Emit JSON logs (production profile)
    #[arg(long)]
    pub json_logs: bool,
}

pub fn execute(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = if args.json_logs {
        Profile::Production
    } else {
        Profile::Development
    };
    logging::init(profile);

    // Opening the store applies pending schema migrations.
    let store = SqlitePersonStore::open(&args.db)?;
    let service = PersonService::new(Arc::new(store));
    let router = app(AppState::new(service));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(args.addr).await?;
        info!(addr = %args.addr, db = %args.db.display(), "rolodex listening");
        axum::serve(listener, router).await
    })?;

    Ok(())
}
