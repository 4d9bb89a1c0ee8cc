use std::{net::SocketAddr, path::Path};

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::info;
use warp::Filter;

const SAMPLE_CUSTOMERS: &str = include_str!("../fixtures/customers.json");

/// Reads the customers payload from `path`, or falls back to the bundled sample.
pub async fn load_payload(path: Option<&Path>) -> Result<Value> {
    let raw = match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read fixture file {}", path.display()))?,
        None => SAMPLE_CUSTOMERS.to_string(),
    };
    serde_json::from_str(&raw).context("Fixture file is not valid JSON")
}

/// Resolves `host:port`, accepting hostnames as well as IP literals.
pub async fn resolve_addr(address: &str) -> Result<SocketAddr> {
    tokio::net::lookup_host(address)
        .await
        .with_context(|| format!("Invalid fixture address {}", address))?
        .next()
        .with_context(|| format!("Fixture address {} did not resolve", address))
}

/// `GET /api/customers` answering `{"data": payload}`.
pub fn routes(
    payload: Value,
) -> impl Filter<Extract = (warp::reply::Json,), Error = warp::Rejection> + Clone {
    let body = json!({ "data": payload });
    warp::path!("api" / "customers")
        .and(warp::get())
        .map(move || {
            info!("Serving customers fixture");
            warp::reply::json(&body)
        })
}

pub async fn serve(addr: SocketAddr, payload: Value) -> Result<()> {
    let (bound, server) = warp::serve(routes(payload))
        .try_bind_with_graceful_shutdown(addr, async {
            tokio::signal::ctrl_c().await.ok();
        })
        .with_context(|| format!("Failed to bind fixture server on {}", addr))?;

    info!(addr = %bound, "Fixture server listening on /api/customers");
    server.await;
    info!("Fixture server stopped");
    Ok(())
}
