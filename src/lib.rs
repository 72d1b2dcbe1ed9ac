use std::sync::Arc;

use axum::{middleware, routing::get, Router};

pub mod config;
pub mod contact_store;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

use contact_store::ContactStore;

#[derive(Clone)]
pub struct AppState {
    pub contact_store: Arc<dyn ContactStore>,
    pub base_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(contact_store: Arc<dyn ContactStore>, base_url: Option<String>) -> Self {
        Self {
            contact_store,
            base_url: base_url.map(Arc::<str>::from),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::discovery))
        .route("/health", get(http::handlers::health))
        .route(
            "/contacts",
            get(http::handlers::list_contacts).post(http::handlers::create_contact),
        )
        .route(
            "/contacts/person/{id}",
            get(http::handlers::get_person)
                .put(http::handlers::update_person)
                .delete(http::handlers::delete_person),
        )
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
