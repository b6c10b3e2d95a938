//! `serve` command: run the HTTP service until shutdown

use tracing::info;

use crate::{
    config::Config,
    server::{self, AppState},
    sportsdata::SportsDataClient,
    Result,
};

use super::CommandContext;

/// Open the store once, build the shared state and serve until Ctrl+C/SIGTERM.
pub async fn handle_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    // Fail at startup rather than on the first sync request
    let source = SportsDataClient::from_config(&config)?;

    info!("Initializing state...");
    let ctx = CommandContext::new(config)?;
    let state = AppState::new(ctx.store.clone(), source);

    let listener = server::bind(&ctx.config.bind_address()).await?;
    server::serve(listener, state).await
}
