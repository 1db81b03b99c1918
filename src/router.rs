use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::Settings;
use crate::db::Database;
use crate::handlers::{system, test_table};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct SentivestState {
    inner: Arc<SentivestStateInner>,
}

struct SentivestStateInner {
    settings: Arc<Settings>,
    db: Database,
}

impl SentivestState {
    pub fn new(settings: Arc<Settings>, db: Database) -> Self {
        Self {
            inner: Arc::new(SentivestStateInner { settings, db }),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub fn db(&self) -> &Database {
        &self.inner.db
    }
}

pub fn sentivest_router(state: SentivestState) -> Router {
    let cors = cors_layer(state.settings().allowed_origins());

    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/health/db", get(system::database_health))
        .route("/test-table", get(test_table::list_test_table))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS restricted to the configured origins. Entries that are not valid header values are skipped.
/// A literal `*` entry allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(origin = %origin, error = %e, "skipping invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}
