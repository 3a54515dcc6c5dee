// ABOUTME: Server binary for the NutriAI nutrition assistant API
// ABOUTME: Loads configuration, wires resources, and starts the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! # NutriAI Server Binary
//!
//! Starts the REST API with an in-memory record store and the Groq
//! completion gateway. All configuration comes from the environment;
//! `--http-port` overrides the configured port.

use anyhow::Result;
use clap::Parser;
use nutriai_server::{
    config::environment::ServerConfig,
    llm::GroqProvider,
    logging,
    resources::ServerResources,
    server,
    storage::MemoryStorage,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutriai-server")]
#[command(about = "NutriAI - AI-powered nutrition assistant API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting NutriAI server");
    info!("{}", config.summary());

    let storage = Arc::new(MemoryStorage::new());
    info!("In-memory record store initialized with seeded food catalog");

    let llm = Arc::new(GroqProvider::from_env());

    let resources = Arc::new(ServerResources::new(storage, llm, Arc::new(config)));

    server::run(resources).await
}
