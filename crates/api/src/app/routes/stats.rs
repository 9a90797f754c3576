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

pub async fn get_stats(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match blocking(&services, |s| s.stats.get()).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(res) => res,
    }
}

/// Add one submitted inventory total to the global counter.
pub async fn record_stats(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RecordStatsRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return errors::invalid_request(rejection.body_text()),
    };
    let Some(value) = body.inventory_value.as_ref().and_then(|v| v.as_f64()) else {
        return errors::invalid_request("invalid inventory value");
    };

    match blocking(&services, move |s| s.stats.record(value)).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(res) => res,
    }
}
