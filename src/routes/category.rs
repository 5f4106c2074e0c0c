//! This file defines the API routes for the category type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    models::{DatabaseID, NewCategory},
    stores::{CategoryStore, TransactionStore},
};

/// A route handler for listing all categories.
pub async fn get_categories<C, T>(State(state): State<AppState<C, T>>) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    state
        .category_store
        .get_all()
        .map(|categories| (StatusCode::OK, Json(categories)))
}

/// A route handler for creating a new category.
pub async fn create_category<C, T>(
    State(state): State<AppState<C, T>>,
    Json(new_category): Json<NewCategory>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    state
        .category_store
        .create(new_category)
        .map(|category| (StatusCode::OK, Json(category)))
}

/// A route handler for getting a category by its database ID.
///
/// This function will return the status code 404 if the requested resource does not exist (e.g., not created yet).
pub async fn get_category<C, T>(
    State(state): State<AppState<C, T>>,
    Path(category_id): Path<DatabaseID>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    state
        .category_store
        .get(category_id)
        .map(|category| (StatusCode::OK, Json(category)))
}
