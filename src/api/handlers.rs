//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all roster endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_salary_breakdown, check_amount_limit, check_rate_limits};
use crate::models::{EmployeeFactory, PayrollItem};

use super::request::{CreateEmployeeRequest, PayrollItemRequest, YearQuery};
use super::response::{ApiError, ApiErrorResponse, EmployeeEntry};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route(
            "/employees/:index/payroll-items",
            post(add_payroll_item_handler),
        )
        .route(
            "/employees/:index/annual-salary",
            get(annual_salary_handler),
        )
        .route("/statistics", get(statistics_handler))
        .with_state(state)
}

/// Handler for POST /employees.
///
/// Builds the employee through the factory, checks its rates against the
/// value limits, and appends it to the roster.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let created = EmployeeFactory::create(
        &request.scheme,
        request.full_name,
        request.position,
        request.rates,
    )
    .and_then(|employee| {
        check_rate_limits(employee.rates())?;
        Ok(employee)
    });

    let employee = match created {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee rejected"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let entry = {
        let mut roster = state.roster().write().await;
        let index = roster.add(employee.clone());
        EmployeeEntry { index, employee }
    };

    info!(
        correlation_id = %correlation_id,
        index = entry.index,
        scheme = %entry.employee.scheme(),
        "Employee added"
    );
    (StatusCode::CREATED, Json(entry)).into_response()
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let roster = state.roster().read().await;
    let entries: Vec<EmployeeEntry> = roster
        .employees()
        .iter()
        .enumerate()
        .map(|(index, employee)| EmployeeEntry {
            index,
            employee: employee.clone(),
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        employees = entries.len(),
        "Roster listed"
    );
    (StatusCode::OK, Json(entries)).into_response()
}

/// Handler for POST /employees/:index/payroll-items.
async fn add_payroll_item_handler(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
    payload: Result<Json<PayrollItemRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll item request");

    let index = match index {
        Ok(Path(index)) => index,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };

    let item: PayrollItem = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    if let Err(err) = check_amount_limit(item.amount()) {
        warn!(correlation_id = %correlation_id, error = %err, "Payroll item rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let mut roster = state.roster().write().await;
    match roster.get_mut(index) {
        Ok(employee) => {
            employee.add_payroll_item(item.clone());
            info!(
                correlation_id = %correlation_id,
                index,
                amount = %item.amount(),
                date = %item.date(),
                "Payroll item added"
            );
            (StatusCode::CREATED, Json(item)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll item rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees/:index/annual-salary?year=YYYY.
async fn annual_salary_handler(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let index = match index {
        Ok(Path(index)) => index,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    let year = match query {
        Ok(Query(query)) => query.year,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let roster = state.roster().read().await;
    match roster.get(index) {
        Ok(employee) => {
            let breakdown = calculate_salary_breakdown(employee, year);
            info!(
                correlation_id = %correlation_id,
                index,
                year,
                annual_salary = %breakdown.annual_salary,
                "Annual salary calculated"
            );
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Annual salary failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /statistics?year=YYYY.
async fn statistics_handler(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match query {
        Ok(Query(query)) => query.year,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let stats = state.roster().read().await.statistics(year);
    info!(
        correlation_id = %correlation_id,
        year,
        employees = stats.count,
        sum = %stats.sum,
        duration_us = start_time.elapsed().as_micros(),
        "Statistics calculated"
    );

    (StatusCode::OK, Json(stats)).into_response()
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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
    ApiErrorResponse::bad_request(error).into_response()
}

fn path_rejection_response(correlation_id: Uuid, rejection: PathRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %body_text, "Invalid employee index");
    ApiErrorResponse::bad_request(ApiError::validation_error(format!(
        "Invalid employee index: {}",
        body_text
    )))
    .into_response()
}

fn query_rejection_response(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %body_text, "Invalid year query");
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::RosterStatistics;
    use crate::models::{CompensationScheme, Employee, RateFields, Roster, SalaryBreakdown};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let mut roster = Roster::new();
        roster.add(Employee::new(
            "Ivan Ivanov",
            "Engineer",
            CompensationScheme::Fixed,
            RateFields {
                monthly_rate: Some(dec("1000")),
                ..RateFields::default()
            },
        ));
        AppState::new(roster)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_employee_returns_201_with_index() {
        let router = create_router(create_test_state());
        let body = r#"{
            "scheme": "hourly",
            "full_name": "Petr Petrov",
            "position": "Developer",
            "hour_rate": "100.50",
            "hours_per_month": 160
        }"#;

        let (status, body) = send(router, post_json("/employees", body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let entry: EmployeeEntry = serde_json::from_slice(&body).unwrap();
        assert_eq!(entry.index, 1);
        assert_eq!(entry.employee.scheme(), CompensationScheme::Hourly);
        assert_eq!(entry.employee.annual_salary(2024), dec("192960"));
    }

    #[tokio::test]
    async fn test_create_employee_unknown_scheme_returns_400() {
        let state = create_test_state();
        let router = create_router(state.clone());
        let body = r#"{ "scheme": "piecework", "full_name": "X", "position": "Y" }"#;

        let (status, body) = send(router, post_json("/employees", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_SCHEME_TYPE");
        assert_eq!(state.roster().read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_employee_with_out_of_range_rate_returns_400() {
        let state = create_test_state();
        let router = create_router(state.clone());
        let body = r#"{
            "scheme": "fixed",
            "full_name": "X",
            "position": "Y",
            "monthly_rate": "79228162514264337593543950335"
        }"#;

        let (status, body) = send(router, post_json("/employees", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(state.roster().read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_add_payroll_item_with_out_of_range_amount_returns_400() {
        let state = create_test_state();
        let router = create_router(state.clone());
        let body = r#"{ "description": "Bonus", "amount": "-50000000000000000000000000000", "date": "2024-05-10" }"#;

        let (status, body) =
            send(router, post_json("/employees/0/payroll-items", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            state.roster().read().await.get(0).unwrap().payroll_items().is_empty()
        );
    }

    #[tokio::test]
    async fn test_list_employees_returns_entries_with_indices() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, get("/employees")).await;
        assert_eq!(status, StatusCode::OK);

        let entries: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(entries[0]["index"], 0);
        assert_eq!(entries[0]["employee"]["full_name"], "Ivan Ivanov");
    }

    #[tokio::test]
    async fn test_create_employee_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, post_json("/employees", "{invalid json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_add_payroll_item_to_unknown_employee_returns_404() {
        let router = create_router(create_test_state());
        let body = r#"{ "description": "Bonus", "amount": "500", "date": "2024-05-10" }"#;

        let (status, body) =
            send(router, post_json("/employees/5/payroll-items", body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_add_payroll_item_with_bad_amount_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{ "description": "Bonus", "amount": "1,000", "date": "2024-05-10" }"#;

        let (status, body) =
            send(router, post_json("/employees/0/payroll-items", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_non_numeric_index_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, get("/employees/abc/annual-salary?year=2024")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_annual_salary_returns_breakdown() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, get("/employees/0/annual-salary?year=2024")).await;
        assert_eq!(status, StatusCode::OK);

        let breakdown: SalaryBreakdown = serde_json::from_slice(&body).unwrap();
        assert_eq!(breakdown.year, 2024);
        assert_eq!(breakdown.annual_salary, dec("12000"));
    }

    #[tokio::test]
    async fn test_annual_salary_without_year_returns_400() {
        let router = create_router(create_test_state());

        let (status, _) = send(router, get("/employees/0/annual-salary")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_statistics_returns_roster_statistics() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, get("/statistics?year=2024")).await;
        assert_eq!(status, StatusCode::OK);

        let stats: RosterStatistics = serde_json::from_slice(&body).unwrap();
        assert_eq!(stats.sum, dec("12000"));
        assert_eq!(stats.count, 1);
    }

    #[tokio::test]
    async fn test_statistics_on_empty_roster_is_zero() {
        let router = create_router(AppState::default());

        let (status, body) = send(router, get("/statistics?year=2024")).await;
        assert_eq!(status, StatusCode::OK);

        let stats: RosterStatistics = serde_json::from_slice(&body).unwrap();
        assert_eq!(stats, RosterStatistics::default());
    }

    #[tokio::test]
    async fn test_statistics_with_non_integer_year_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, get("/statistics?year=twenty")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
