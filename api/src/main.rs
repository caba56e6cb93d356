use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "virtualfridge=debug,axum=info,tower_http=info".to_string());
    if args.server.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let args = Arc::new(args);
    let state = state(args.clone()).await?;
    let app = router(state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
