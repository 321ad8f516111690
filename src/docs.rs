use utoipa::OpenApi;

use snipstash_core::ErrorResponse;
use snipstash_models::{
    Item, ItemId, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserId,
    UserSummary,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::items::controller::get_items,
        crate::modules::items::controller::create_item,
        crate::modules::items::controller::delete_item,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UserSummary,
            UserId,
            Item,
            ItemId,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Items", description = "Snippet items; no authentication required")
    ),
    info(
        title = "Snipstash API",
        version = "0.1.0",
        description = "A small REST API for storing code snippets, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
