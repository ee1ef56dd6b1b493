use std::{env, path::PathBuf};

use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use storefront_core::{
    config::Config, error::StorefrontResult, logging::init_tracing, server::server::Server,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> StorefrontResult<()> {
    // First argument wins over the environment
    let config_path = env::args()
        .nth(1)
        .or_else(|| env::var("STOREFRONT_CONFIG").ok())
        .map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    init_tracing(&config.log_level);

    let server = Server::from_config(&config)?;
    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, timezone = %config.timezone, "Listening");

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(connection) => connection,
            Err(err) => {
                error!(%err, "Could not accept connection");
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let server_clone = server.clone();
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, server_clone)
                .await
            {
                error!(%peer, %err, "Connection error");
            }
        });
    }
}
