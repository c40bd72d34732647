use super::{controllers, middleware, models};
use axum::{
    middleware::from_fn,
    routing::{delete, get, post, Router},
};

#[rustfmt::skip]
pub fn get_routes() -> Router<models::AppState> {
    Router::new()
        .route("/", get(controllers::root))
        .route("/ping", get(controllers::pong))
        .route("/config", post(controllers::save_config))
        .route("/api-health", get(controllers::api_health))
        .route("/tab/:tab", get(controllers::get_tab))
        .route("/properties", post(controllers::create_property))
        .route("/properties/:id", delete(controllers::delete_property).put(controllers::update_property_status))
        .route("/tenants", post(controllers::create_tenant))
        .route("/tenants/:id", delete(controllers::delete_tenant))
        .route("/leases", post(controllers::create_lease))
        .route("/leases/:id", delete(controllers::delete_lease))
        .layer(from_fn(middleware::html_headers))
}
