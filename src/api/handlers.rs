//! HTTP request handlers for the budget API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tokio::task;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_summary_from_form;
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetForm;
use crate::storage::BudgetStore;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, BudgetView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/budget", get(budget_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Parses the submitted form, computes its summary and saves both. On any
/// failure the previously saved budget is left untouched.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let form: BudgetForm = request.into();
    let config = state.config();

    let calculation = match compute_summary_from_form(&form, config.tax_schedule()) {
        Ok(calculation) => calculation,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            return error_response(err);
        }
    };

    let saved_form = form.clone();
    let summary = calculation.summary.clone();
    let saved = with_store(&state, move |store| store.save(&saved_form, &summary)).await;
    if let Err(err) = saved {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Failed to save budget"
        );
        return error_response(err);
    }

    info!(
        correlation_id = %correlation_id,
        calculation_id = %calculation.calculation_id,
        expenses_count = form.expenses.len(),
        total_monthly_income = %calculation.summary.total_monthly_income,
        total_monthly_expenses = %calculation.summary.total_monthly_expenses,
        warnings = calculation.audit_trace.warnings.len(),
        duration_us = calculation.audit_trace.duration_us,
        "Calculation completed successfully"
    );
    json_response(StatusCode::OK, calculation)
}

/// Handler for GET /budget endpoint.
///
/// Returns the saved budget with both discretionary figures, or the
/// default form when nothing has been saved.
async fn budget_handler(State(state): State<AppState>) -> Response {
    match with_store(&state, |store| store.load()).await {
        Ok(stored) => {
            info!(found = stored.is_some(), "Loaded saved budget");
            json_response(StatusCode::OK, BudgetView::from(stored))
        }
        Err(err) => {
            warn!(error = %err, "Failed to load budget");
            error_response(err)
        }
    }
}

/// Runs a store operation on the blocking thread pool.
async fn with_store<T, F>(state: &AppState, operation: F) -> BudgetResult<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn BudgetStore) -> BudgetResult<T> + Send + 'static,
{
    let store = state.shared_store();
    task::spawn_blocking(move || operation(store.as_ref()))
        .await
        .map_err(|e| BudgetError::Storage {
            message: format!("Store task failed: {}", e),
        })?
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: BudgetError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::SummaryCalculation;
    use crate::models::BudgetSummary;
    use crate::storage::{MemoryStore, StoredBudget};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Barrier;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::builtin(), MemoryStore::new())
    }

    fn post_request(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200_and_saves() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let body = r#"{
            "yearly_salary": "90000",
            "weekly_rental": "500",
            "savings_target": "20",
            "expenses": [{ "name": "Groceries", "amount": "200", "frequency": "weekly" }]
        }"#;

        let response = router.oneshot(post_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let result: SummaryCalculation = read_body(response).await;
        assert_eq!(result.summary.monthly_salary_income, dec("5856.92"));
        assert_eq!(result.summary.total_monthly_expenses, dec("800"));

        let stored = state.store().load().unwrap().unwrap();
        assert_eq!(stored.form.yearly_salary, "90000");
        assert_eq!(stored.summary, result.summary);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router.oneshot(post_request("{invalid json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_negative_salary_returns_400_and_saves_nothing() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let response = router
            .oneshot(post_request(r#"{ "yearly_salary": "-1" }"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "NEGATIVE_SALARY");
        assert!(state.store().load().unwrap().is_none());
    }

    fn get_budget_request() -> Request<Body> {
        Request::builder()
            .uri("/budget")
            .body(Body::empty())
            .unwrap()
    }

    /// Holds every save until two are in flight at once.
    struct PairedSaveStore {
        barrier: Barrier,
        inner: MemoryStore,
    }

    impl BudgetStore for PairedSaveStore {
        fn load(&self) -> BudgetResult<Option<StoredBudget>> {
            self.inner.load()
        }

        fn save(&self, form: &BudgetForm, summary: &BudgetSummary) -> BudgetResult<()> {
            self.barrier.wait();
            self.inner.save(form, summary)
        }
    }

    #[tokio::test]
    async fn test_saves_run_off_the_request_thread() {
        // Single-threaded runtime: a save blocking in place would stall the
        // other request and never reach the barrier.
        let state = AppState::new(
            ConfigLoader::builtin(),
            PairedSaveStore {
                barrier: Barrier::new(2),
                inner: MemoryStore::new(),
            },
        );
        let router = create_router(state.clone());

        let (first, second) = tokio::join!(
            router
                .clone()
                .oneshot(post_request(r#"{ "yearly_salary": "12000" }"#)),
            router.oneshot(post_request(r#"{ "yearly_salary": "24000" }"#)),
        );

        assert_eq!(first.unwrap().status(), StatusCode::OK);
        assert_eq!(second.unwrap().status(), StatusCode::OK);
        assert!(state.store().load().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_budget_returns_previously_saved_state() {
        let stored = StoredBudget::new(
            BudgetForm {
                yearly_salary: "60000".to_string(),
                ..BudgetForm::default()
            },
            BudgetSummary {
                monthly_salary_income: dec("4000"),
                monthly_rental_income: dec("0"),
                total_monthly_income: dec("4000"),
                target_monthly_savings: dec("400"),
                total_monthly_expenses: dec("1000"),
            },
        );
        let state = AppState::new(ConfigLoader::builtin(), MemoryStore::with_budget(stored));

        let response = create_router(state)
            .oneshot(get_budget_request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let view: BudgetView = read_body(response).await;
        assert_eq!(view.form.yearly_salary, "60000");
        assert_eq!(view.monthly_spend_available, Some(dec("2600")));
        assert_eq!(view.income_after_expenses, Some(dec("3000")));
    }

    #[tokio::test]
    async fn test_oversized_amount_returns_400() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let response = router
            .oneshot(post_request(
                r#"{ "weekly_rental": "7000000000000000000000000000" }"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "AMOUNT_OUT_OF_RANGE");
        assert!(state.store().load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_budget_without_saved_state_returns_defaults() {
        let router = create_router(create_test_state());

        let response = router.oneshot(get_budget_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let view: BudgetView = read_body(response).await;
        assert_eq!(view.form, BudgetForm::default());
        assert!(view.summary.is_none());
    }
}
