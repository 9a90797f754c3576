use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::routes::blocking;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Price a pasted inventory. Unreadable lines are skipped and unknown items
/// are returned without a value; neither is an error.
pub async fn process_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::InventoryRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return errors::invalid_request(rejection.body_text()),
    };
    let Some(text) = body.inventory_text.filter(|t| !t.trim().is_empty()) else {
        return errors::invalid_request("inventory text is required");
    };

    match blocking(&services, move |s| s.items.resolve_inventory(&text)).await {
        Ok(result) => {
            let unrecognized = result.items.iter().filter(|row| !row.is_recognized()).count();
            tracing::info!(
                rows = result.items.len(),
                unrecognized,
                total_value = result.total_value,
                "inventory processed"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(res) => res,
    }
}
