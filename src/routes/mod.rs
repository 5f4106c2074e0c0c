//! This module defines the REST API's routes and their handlers.

use axum::{
    Router,
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState, Error, endpoints,
    stores::{CategoryStore, TransactionStore},
};

pub mod category;
pub mod transaction;

/// Return a router with all the app's routes.
pub fn build_router<C, T>(state: AppState<C, T>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::CATEGORIES,
            get(category::get_categories::<C, T>).post(category::create_category::<C, T>),
        )
        .route(endpoints::CATEGORY, get(category::get_category::<C, T>))
        .route(
            endpoints::TRANSACTIONS,
            get(transaction::get_transactions::<C, T>)
                .post(transaction::create_transaction::<C, T>),
        )
        .route(
            endpoints::TRANSACTION,
            get(transaction::get_transaction::<C, T>)
                .delete(transaction::delete_transaction::<C, T>),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Allow cross-origin requests to the API from `allowed_origin` only.
pub fn add_cors_layer(router: Router, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    router.layer(cors)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
