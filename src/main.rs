use borrow_ledger::{
    adapters::{
        SystemClock,
        mock::{
            FixedClock,
            seed::{demo_records, demo_reference_date},
        },
    },
    api::{handlers::AppState, router::create_router},
    application::ledger::LoanRecordStore,
    config::Config,
    ports::Clock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "borrow_ledger=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Reference date source
    let clock: Arc<dyn Clock> = match config.fixed_reference_date(demo_reference_date()) {
        Some(date) => {
            tracing::info!("Using fixed reference date {}", date);
            Arc::new(FixedClock::new(date))
        }
        None => {
            tracing::info!("Using system clock for reference date");
            Arc::new(SystemClock::new())
        }
    };

    let store = if config.seed_demo {
        LoanRecordStore::with_records(demo_records())?
    } else {
        LoanRecordStore::new()
    };
    tracing::info!("Ledger loaded with {} records", store.len());

    // Create application state
    let app_state = Arc::new(AppState::new(store, clock));

    // Create router
    let app = create_router(app_state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
