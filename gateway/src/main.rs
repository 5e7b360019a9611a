//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use axum::{Router, routing::get};
use clap::Parser;
use shardrealms_engine::WorldCatalog;
use shardrealms_gateway::GatewayContext;
use shardrealms_gateway::config::{Arguments, Configuration};
use shardrealms_gateway::{routes, webapp, websocket};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load environment variables from .env file if specified
    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        }
    } else {
        // Try default .env file
        tracing::debug!("Loading environment variables from default file");
        dotenv::dotenv().ok();
    }

    // Load configuration from a file with environment variable substitution
    let config: Configuration = Configuration::load(&arguments.config_file)
        .inspect_err(|err| eprintln!("Configuration load error: {}", err))
        .expect("Unable to load configuration file");

    debug!("Configuration loaded: {:?}", config);
    info!("Starting Shardrealms Gateway Server...");

    // Load the world catalog shared by every session
    let catalog = Arc::new(
        WorldCatalog::load(config.content.root.as_path()).expect("Unable to load game content"),
    );
    info!("Loaded {} worlds from {}", catalog.len(), config.content.root);

    // Create the shared route state
    let context = GatewayContext::new(
        catalog,
        config.saves.directory.as_path().to_path_buf(),
        config.saves.keep_quicksaves,
        config.content.default_world.clone(),
    );

    // Spawn the idle session sweeper
    let session_config = config.session.unwrap_or_default();
    let registry = Arc::clone(context.registry());
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(tokio::time::Duration::from_secs(session_config.sweep_interval));
        loop {
            interval.tick().await;
            registry.cleanup_expired(session_config.timeout);
        }
    });

    // build our application with routes
    let app = Router::new()
        .route("/client.html", get(webapp::client_page))
        .route("/client.css", get(webapp::client_css))
        .route("/client.js", get(webapp::client_js))
        .route("/websocket", get(websocket::handler))
        .merge(routes::routes())
        .with_state(context);

    // Get listener config or use defaults
    let listener_config = config.listener.unwrap_or_default();
    let listener = tokio::net::TcpListener::bind(listener_config.addr.to_addr())
        .await
        .expect("Unable to bind to the gateway port");

    info!(
        "Gateway listening on {} ({}:{})",
        listener_config.addr,
        listener_config.addr.to_ip(),
        listener_config.addr.to_port()
    );

    axum::serve(listener, app)
        .await
        .expect("Gateway server failed");
}
