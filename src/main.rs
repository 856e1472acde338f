use std::net::TcpListener;
use std::sync::Arc;

use cricketpro_backend::config::settings::get_config;
use cricketpro_backend::run;
use cricketpro_backend::store::MemStore;
use cricketpro_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "cricketpro-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // Everything lives in process memory; a restart starts from scratch.
    let store = Arc::new(MemStore::new());

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(listener, store, config.sync)?.await
}
