use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use momroute_server::cache::{CacheConfig, CachedDirectionsClient};
use momroute_server::directions::{DirectionsClient, DirectionsConfig};
use momroute_server::outages::{OutageClient, OutageClientConfig, OutageSnapshot};
use momroute_server::scoring::ScoringConfig;
use momroute_server::settings::Settings;
use momroute_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "momroute_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    // Create directions client
    let directions_config = DirectionsConfig::new(&settings.google_maps_api_key);
    let directions_client = DirectionsClient::new(directions_config)?;

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_directions = CachedDirectionsClient::new(directions_client, &cache_config);

    // Fetch elevator outages, starting empty if the feed is down
    let outage_client = OutageClient::new(OutageClientConfig::new(settings.mta_api_key.clone()))?;
    let outages = match OutageSnapshot::fetch(outage_client.clone()).await {
        Ok(snapshot) => {
            info!(
                stations = snapshot.current().await.len(),
                "loaded elevator outages"
            );
            snapshot
        }
        Err(e) => {
            warn!(error = %e, "outage feed unavailable, starting with no known outages");
            OutageSnapshot::empty(outage_client)
        }
    };

    // Spawn background task to re-poll the outage feed
    let outages_refresh = outages.clone();
    let refresh_every = settings.outage_refresh;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_every);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match outages_refresh.refresh().await {
                Ok(count) => info!(stations = count, "refreshed elevator outages"),
                Err(e) => warn!(error = %e, "failed to refresh elevator outages"),
            }
        }
    });

    // Build app state
    let state = AppState::new(cached_directions, outages, ScoringConfig::default());

    // Create router
    let app = create_router(state, &settings.static_dir);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    info!(addr = %settings.addr, "MomRoute listening");
    info!("endpoints: GET / | GET /health | GET /api/mta-elevators | POST /routes/plan | POST /api/score");

    axum::serve(listener, app).await?;
    Ok(())
}
