use departure_server::config::ServerConfig;
use departure_server::serviceinfo::ServiceInfoClient;
use departure_server::store::DepartureStore;
use departure_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load departures (fail fast if the snapshot is unreadable)
    let store = DepartureStore::load(&config.data_dir)?;

    let serviceinfo = ServiceInfoClient::new(config.serviceinfo.clone())?;
    match &config.serviceinfo {
        Some(si) if si.enabled => info!(url = %si.url, "serviceinfo enrichment enabled"),
        _ => info!("serviceinfo enrichment disabled"),
    }

    let mut state = AppState::new(store, serviceinfo);
    if let Some(time) = config.replay_time {
        info!(%time, "replaying snapshot at fixed time");
        state = state.with_replay_time(time);
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Departure feed listening on http://{}", config.bind);
    info!("  GET /health");
    info!("  GET /station/{{code}}?taal=&materieel=&stopstations=");
    info!("  GET /train/{{date}}/{{number}}/{{station}}");

    axum::serve(listener, app).await?;
    Ok(())
}
