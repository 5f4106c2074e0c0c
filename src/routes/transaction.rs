//! This file defines the API routes for the transaction type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    models::{DatabaseID, TransactionRequest},
    stores::{CategoryStore, TransactionStore},
};

/// A route handler for listing all transactions with their categories.
pub async fn get_transactions<C, T>(State(state): State<AppState<C, T>>) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    state
        .transaction_service
        .get_all()
        .map(|transactions| (StatusCode::OK, Json(transactions)))
}

/// A route handler for creating a new transaction.
///
/// Responds with 404 if the category ID in the request does not refer to a category.
pub async fn create_transaction<C, T>(
    State(state): State<AppState<C, T>>,
    Json(request): Json<TransactionRequest>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    state
        .transaction_service
        .create(request)
        .map(|transaction| (StatusCode::OK, Json(transaction)))
}

/// A route handler for getting a transaction by its database ID.
///
/// This function will return the status code 404 if the requested resource does not exist (e.g., not created yet).
pub async fn get_transaction<C, T>(
    State(state): State<AppState<C, T>>,
    Path(transaction_id): Path<DatabaseID>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    state
        .transaction_service
        .get(transaction_id)
        .map(|transaction| (StatusCode::OK, Json(transaction)))
}

/// A route handler for deleting a transaction.
///
/// Responds with 200 and an empty body whether or not the transaction existed.
pub async fn delete_transaction<C, T>(
    State(state): State<AppState<C, T>>,
    Path(transaction_id): Path<DatabaseID>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    state
        .transaction_service
        .delete(transaction_id)
        .map(|_| StatusCode::OK)
}

#[cfg(test)]
mod transaction_route_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        endpoints::{self, format_endpoint},
        models::{Amount, Category, Transaction, TransactionRequest},
        routes::build_router,
        stores::sqlite::create_app_state,
    };

    fn get_test_server() -> TestServer {
        let state = create_app_state(Connection::open_in_memory().unwrap())
            .expect("Could not create app state.");

        TestServer::new(build_router(state))
    }

    async fn create_salary_category(server: &TestServer) -> Category {
        server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Salary", "type": "income"}))
            .await
            .json::<Category>()
    }

    fn paycheck(category_id: i64) -> TransactionRequest {
        TransactionRequest {
            title: "Paycheck".to_owned(),
            amount: Amount::from_minor_units(2000),
            date: date!(2024 - 01 - 01),
            kind: "income".to_owned(),
            category_id,
        }
    }

    #[tokio::test]
    async fn create_transaction() {
        let server = get_test_server();
        let category = create_salary_category(&server).await;

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&paycheck(category.id))
            .await;

        response.assert_status_ok();
        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.category, category);
        assert_eq!(transaction.title, "Paycheck");
        assert_eq!(transaction.amount, Amount::from_minor_units(2000));
        assert_eq!(transaction.date, date!(2024 - 01 - 01));
        assert_eq!(transaction.kind, "income");
    }

    #[tokio::test]
    async fn create_transaction_with_missing_category_fails() {
        let server = get_test_server();
        create_salary_category(&server).await;

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&paycheck(999))
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({"error": "Category not found: there is no category with the ID 999"}));
        server
            .get(endpoints::TRANSACTIONS)
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn create_transaction_rejects_malformed_date() {
        let server = get_test_server();
        let category = create_salary_category(&server).await;

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "title": "Paycheck",
                "amount": 2000,
                "date": "yesterday",
                "type": "income",
                "categoryId": category.id
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn get_transaction() {
        let server = get_test_server();
        let category = create_salary_category(&server).await;
        let created = server
            .post(endpoints::TRANSACTIONS)
            .json(&paycheck(category.id))
            .await
            .json::<Transaction>();

        let response = server
            .get(&format_endpoint(endpoints::TRANSACTION, created.id))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Transaction>(), created);
    }

    #[tokio::test]
    async fn get_missing_transaction_returns_not_found() {
        let server = get_test_server();

        server
            .get(&format_endpoint(endpoints::TRANSACTION, 1))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_removes_transaction_from_list() {
        let server = get_test_server();
        let category = create_salary_category(&server).await;
        let kept = server
            .post(endpoints::TRANSACTIONS)
            .json(&paycheck(category.id))
            .await
            .json::<Transaction>();
        let deleted = server
            .post(endpoints::TRANSACTIONS)
            .json(&paycheck(category.id))
            .await
            .json::<Transaction>();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, deleted.id))
            .await;

        response.assert_status_ok();
        assert_eq!(
            server
                .get(endpoints::TRANSACTIONS)
                .await
                .json::<Vec<Transaction>>(),
            vec![kept]
        );
    }

    #[tokio::test]
    async fn delete_missing_transaction_succeeds_without_changes() {
        let server = get_test_server();
        let category = create_salary_category(&server).await;
        let transaction = server
            .post(endpoints::TRANSACTIONS)
            .json(&paycheck(category.id))
            .await
            .json::<Transaction>();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, transaction.id + 100))
            .await;

        response.assert_status_ok();
        response.assert_text("");
        assert_eq!(
            server
                .get(endpoints::TRANSACTIONS)
                .await
                .json::<Vec<Transaction>>(),
            vec![transaction]
        );
    }

    #[tokio::test]
    async fn paycheck_scenario() {
        let server = get_test_server();

        let category = server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Salary", "type": "income"}))
            .await;
        category.assert_status_ok();
        category.assert_json(&json!({"id": 1, "name": "Salary", "type": "income"}));

        let transaction = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "title": "Paycheck",
                "amount": 2000,
                "date": "2024-01-01",
                "type": "income",
                "categoryId": 1
            }))
            .await;
        transaction.assert_status_ok();
        let want = json!({
            "id": 1,
            "title": "Paycheck",
            "amount": 2000,
            "date": "2024-01-01",
            "type": "income",
            "category": {"id": 1, "name": "Salary", "type": "income"}
        });
        transaction.assert_json(&want);

        server
            .get(endpoints::TRANSACTIONS)
            .await
            .assert_json(&json!([want]));

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, 1))
            .await
            .assert_status_ok();

        server
            .get(endpoints::TRANSACTIONS)
            .await
            .assert_json(&json!([]));
    }
}
