use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
};

use invcalc_inventory::{DEFAULT_SUGGESTION_LIMIT, ItemUpdate, NewItem};

use crate::app::routes::blocking;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Response header telling clients whether a lookup hit exactly or fuzzily.
pub const MATCH_KIND_HEADER: &str = "x-match-kind";

const MAX_SUGGESTION_LIMIT: usize = 50;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:name", get(get_item).put(update_item).delete(delete_item))
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match blocking(&services, |s| s.items.list()).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(res) => res,
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return errors::invalid_request(rejection.body_text()),
    };
    let (Some(name), Some(value)) = (body.name.filter(|n| !n.trim().is_empty()), body.value) else {
        return errors::invalid_request("name and value are required");
    };
    let Some(value) = dto::number_from_json(&value) else {
        return errors::invalid_request("value must be a number");
    };

    let mut new_item = NewItem::new(name, value).sellable(body.sellable.unwrap_or(true));
    if let Some(location) = body.sell_location {
        new_item = new_item.sell_location(location);
    }

    match blocking(&services, move |s| s.items.add(new_item)).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(res) => res,
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    if name.trim().is_empty() {
        return errors::invalid_request("item name is required");
    }

    match blocking(&services, move |s| s.items.find_by_name(&name)).await {
        Ok(Some((item, kind))) => {
            let mut res = (StatusCode::OK, Json(item)).into_response();
            res.headers_mut()
                .insert(MATCH_KIND_HEADER, HeaderValue::from_static(kind.as_str()));
            res
        }
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(res) => res,
    }
}

/// Rename the item with `body.id` to the path name and set its value.
pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
    body: Result<Json<dto::UpdateItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return errors::invalid_request(rejection.body_text()),
    };
    let (Some(id), Some(value)) = (body.id, body.value) else {
        return errors::invalid_request("item id, name and value are required");
    };
    let Some(value) = dto::number_from_json(&value) else {
        return errors::invalid_request("value must be a number");
    };

    let update = ItemUpdate {
        name,
        value,
        sell_location: body.sell_location,
        sellable: body.sellable,
    };

    match blocking(&services, move |s| s.items.update(id, update)).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(res) => res,
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match blocking(&services, move |s| s.items.remove_by_name(&name)).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(res) => res,
    }
}

pub async fn suggestions(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::SuggestQuery>, QueryRejection>,
) -> axum::response::Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return errors::invalid_request(rejection.body_text()),
    };
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .clamp(1, MAX_SUGGESTION_LIMIT);
    let q = query.q.unwrap_or_default();

    match blocking(&services, move |s| s.items.suggest(&q, limit)).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(res) => res,
    }
}
