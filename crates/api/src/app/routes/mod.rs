use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};

use invcalc_infra::StoreError;

use crate::app::errors;
use crate::app::services::AppServices;

pub mod inventory;
pub mod items;
pub mod stats;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .route("/suggestions", get(items::suggestions))
        .route("/inventory", post(inventory::process_inventory))
        .route("/globalStats", get(stats::get_stats).post(stats::record_stats))
}

/// Run a store call on the blocking pool; the file stores do synchronous I/O.
pub(crate) async fn blocking<T, F>(services: &Arc<AppServices>, f: F) -> Result<T, Response>
where
    F: FnOnce(&AppServices) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let services = Arc::clone(services);
    match tokio::task::spawn_blocking(move || f(&services)).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(errors::store_error_to_response(e)),
        Err(e) => {
            tracing::error!("store task failed: {e}");
            Err(errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "store task failed",
            ))
        }
    }
}
