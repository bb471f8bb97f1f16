mod analysis;
mod config;
mod cover_letter;
mod errors;
mod prediction;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::prediction::sources::{RandomSource, SeededRandom, SystemClock, ThreadRandom};
use crate::routes::build_router;
use crate::skills::taxonomy::DEFAULT_TAXONOMY;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparsable values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerSync ML service v{}", env!("CARGO_PKG_VERSION"));

    // Company-response perturbation source (seeded only when RNG_SEED is set)
    let random: Arc<dyn RandomSource> = match config.rng_seed {
        Some(seed) => {
            info!("Random source seeded with {seed}");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    info!(
        "Skill taxonomy loaded: {} categories, {} skills",
        DEFAULT_TAXONOMY.category_names().count(),
        DEFAULT_TAXONOMY.skills().count()
    );

    let state = AppState {
        taxonomy: &DEFAULT_TAXONOMY,
        random,
        clock: Arc::new(SystemClock),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
