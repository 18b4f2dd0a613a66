use std::env;

use dotenvy::dotenv;

use app::config::{app_config::AppConfig, database_config};
use app::navigation::{Navigator, Route};
use app::setup::dependency_injection::DependencyContainer;
use app::state::home::HomeState;

/// Route-change sink of the headless shell.
struct ShellNavigator;

impl Navigator for ShellNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!("navigating to {}", route.path());
    }
}

/// App Entry Point
///
/// Initializes the on-device store and the remote catalog client, wires the
/// screen state holders, and brings the start destination up once. The
/// rendering shell attaches to the holders' `watch` channels from here on.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize the local store
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config);

    // 6. Resolve the start destination (APP_START_ROUTE supports deep links)
    let start = env::var("APP_START_ROUTE")
        .ok()
        .and_then(|path| Route::parse(&path))
        .unwrap_or(Route::Home);
    ShellNavigator.navigate(start.clone());

    // 7. Bring the persisted screens up and fetch the catalog once
    container.cart.refresh().await;
    container.favorite.refresh().await;
    container.home.refresh().await;

    if let Route::Detail { product_id } = start {
        let detail = container.detail_state_holder(product_id);
        detail.refresh().await;
    }

    let home_state = container.home.state();
    match &*home_state.borrow() {
        HomeState::Success(products) => {
            tracing::info!("catalog ready with {} products", products.len());
        }
        HomeState::Error(message) => {
            tracing::warn!("catalog unavailable: {message}");
        }
        HomeState::Loading => {}
    }

    Ok(())
}
