use axum::{
    Router,
    routing::{delete, get},
};

use super::controller::{create_item, delete_item, get_items};
use crate::state::AppState;

pub fn init_items_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_items).post(create_item))
        .route("/{id}", delete(delete_item))
}
