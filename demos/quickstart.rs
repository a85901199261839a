//! Quickstart for msgzip
//!
//! Compresses a response body, decompresses a request body, and logs the
//! resulting headers.
//!
//! Run with: RUST_LOG=debug cargo run -p msgzip-demos --bin quickstart [config]

use anyhow::Context;
use http::{Request, Response, StatusCode};
use msgzip_compression::{load_from_file, CompressionConfig, Compressor};
use msgzip_core::{DefaultStreamFactory, Stream};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_from_file(&path).with_context(|| format!("loading {path}"))?,
        None => CompressionConfig::default(),
    };
    info!(level = config.level, "Compressor configured");

    let compressor = Compressor::with_config(Arc::new(DefaultStreamFactory::new()), config);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "application/json")
        .body(Stream::from(
            r#"{"items":["alpha","beta","gamma","alpha","beta","gamma"]}"#,
        ))?;
    let response = compressor.compress(response)?;
    info!(headers = ?response.headers(), "Compressed response");

    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .body(Stream::empty())?;
    let request = compressor.compress(request)?;
    let mut request = compressor.decompress(request)?;
    let body = request.body_mut().contents()?;
    info!(headers = ?request.headers(), body_len = body.len(), "Decompressed request");

    Ok(())
}
