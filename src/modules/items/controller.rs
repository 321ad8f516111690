use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Map, Value};
use tracing::instrument;

use snipstash_core::{AppError, ErrorResponse};

use super::model::{Item, MessageResponse};
use super::service::ItemService;
use crate::state::AppState;
use crate::validator::JsonPayload;

/// List every item
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Items"
)]
#[instrument(skip_all)]
pub async fn get_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = ItemService::list(state.items.as_ref()).await?;
    Ok(Json(items))
}

/// Create an item
///
/// Any JSON object with a `title`. Members other than `title`, `code` and
/// `user_id` are stored and returned as-is.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body(content = Value, description = "JSON object; `title` is required"),
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Invalid payload or item could not be stored", body = ErrorResponse)
    ),
    tag = "Items"
)]
#[instrument(skip_all)]
pub async fn create_item(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<Map<String, Value>>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let item = ItemService::create(state.items.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Delete an item by id
///
/// Succeeds whether or not an item with that id exists.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 500, description = "Malformed id or internal server error", body = ErrorResponse)
    ),
    tag = "Items"
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    ItemService::delete(state.items.as_ref(), &id).await?;
    Ok(Json(MessageResponse::new("Deleted")))
}
