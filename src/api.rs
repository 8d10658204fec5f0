//! HTTP API for the HR Engine.
//!
//! This module exposes a minimal REST API around the payroll and
//! entitlement cores using the [`axum`](https://crates.io/crates/axum)
//! framework.  Handlers own all the impure edges: they read the clock
//! for "today", consult the record repositories and map store errors
//! to HTTP statuses.  The calculation cores themselves stay pure.

use crate::config::RateConfig;
use crate::engine::run_pay_batch;
use crate::entitlement::compute_entitlements;
use crate::models::{
    ApprovalStatus, Asset, ClaimRecord, Employee, EntitlementResult, JobTask, LeaveRequest,
    PayRunInput, PayrollInput,
};
use crate::payroll::compute_payslip;
use crate::store::{
    seed_assets, seed_employees, seed_leave_requests, seed_tasks, MemStore, Repository,
    StoreError,
};
use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Application state shared across requests.  The rate configuration
/// is fixed at startup; the repositories are the only mutable state
/// and guard themselves internally.
pub struct AppState {
    pub config: RateConfig,
    pub employees: Arc<dyn Repository<Employee>>,
    pub leaves: Arc<dyn Repository<LeaveRequest>>,
    pub claims: Arc<dyn Repository<ClaimRecord>>,
    pub assets: Arc<dyn Repository<Asset>>,
    pub tasks: Arc<dyn Repository<JobTask>>,
}

impl AppState {
    /// State backed by in-memory stores pre-loaded with the demo
    /// roster and records.
    pub fn seeded(config: RateConfig) -> Self {
        AppState {
            config,
            employees: Arc::new(MemStore::seeded(seed_employees())),
            leaves: Arc::new(MemStore::seeded(seed_leave_requests())),
            claims: Arc::new(MemStore::<ClaimRecord>::new()),
            assets: Arc::new(MemStore::seeded(seed_assets())),
            tasks: Arc::new(MemStore::seeded(seed_tasks())),
        }
    }
}

/// Build the API router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/payroll/calculate", post(calculate_handler))
        .route("/api/payroll/run", post(pay_run_handler))
        .route("/api/employees", get(list_employees).post(add_employee))
        .route("/api/employees/:id", get(get_employee).put(update_employee))
        .route("/api/employees/:id/entitlements", get(entitlements_handler))
        .route("/api/leaves", get(list_leaves).post(add_leave))
        .route("/api/leaves/:id/status", put(set_leave_status))
        .route("/api/claims", get(list_claims).post(add_claim))
        .route("/api/claims/:id/status", put(set_claim_status))
        .route("/api/assets", get(list_assets))
        .route("/api/tasks", get(list_tasks))
        .with_state(state)
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn store_error_response(err: StoreError) -> axum::response::Response {
    let status = match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Duplicate { .. } => StatusCode::CONFLICT,
    };
    error_response(status, err.to_string())
}

/// Handler for POST /api/payroll/calculate
async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PayrollInput>,
) -> impl IntoResponse {
    Json(compute_payslip(&input, &state.config))
}

/// Handler for POST /api/payroll/run
async fn pay_run_handler(
    State(state): State<Arc<AppState>>,
    Json(run): Json<PayRunInput>,
) -> impl IntoResponse {
    let roster = state.employees.list();
    info!(month = %run.month, employees = roster.len(), "running pay batch");
    Json(run_pay_batch(&run, &roster, &state.config))
}

/// Entitlement fields plus the ceiling the claims policy actually
/// enforces: the larger of the tenure-derived limit and the
/// configured default.
#[derive(Debug, Serialize)]
struct EntitlementResponse {
    #[serde(flatten)]
    entitlement: EntitlementResult,
    effective_medical_limit: f64,
}

/// Handler for GET /api/employees/:id/entitlements
async fn entitlements_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Some(employee) = state.employees.get(&id) else {
        return store_error_response(StoreError::NotFound { id });
    };
    // The clock is read here at the edge; the core takes "today" as a
    // parameter.
    let today = Utc::now().date_naive();
    let entitlement = compute_entitlements(employee.join_date, employee.basic_salary, today);
    let effective_medical_limit = entitlement
        .medical_limit
        .max(state.config.medical_claim_annual_limit);
    Json(EntitlementResponse {
        entitlement,
        effective_medical_limit,
    })
    .into_response()
}

async fn list_employees(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.employees.list())
}

async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match state.employees.get(&id) {
        Some(employee) => Json(employee).into_response(),
        None => store_error_response(StoreError::NotFound { id }),
    }
}

async fn add_employee(
    State(state): State<Arc<AppState>>,
    Json(employee): Json<Employee>,
) -> axum::response::Response {
    match state.employees.add(employee) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(employee): Json<Employee>,
) -> axum::response::Response {
    match state.employees.update(&id, employee) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn list_leaves(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.leaves.list())
}

async fn add_leave(
    State(state): State<Arc<AppState>>,
    Json(leave): Json<LeaveRequest>,
) -> axum::response::Response {
    match state.leaves.add(leave) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => store_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct StatusUpdate {
    status: ApprovalStatus,
}

async fn set_leave_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> axum::response::Response {
    let Some(mut leave) = state.leaves.get(&id) else {
        return store_error_response(StoreError::NotFound { id });
    };
    leave.status = update.status;
    match state.leaves.update(&id, leave) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn list_claims(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.claims.list())
}

async fn add_claim(
    State(state): State<Arc<AppState>>,
    Json(claim): Json<ClaimRecord>,
) -> axum::response::Response {
    match state.claims.add(claim) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn set_claim_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> axum::response::Response {
    let Some(mut claim) = state.claims.get(&id) else {
        return store_error_response(StoreError::NotFound { id });
    };
    claim.status = update.status;
    match state.claims.update(&id, claim) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}

async fn list_assets(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.assets.list())
}

async fn list_tasks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.tasks.list())
}

/// Launch the API server.  Builds the router over seeded in-memory
/// stores and blocks until the server terminates.
pub async fn serve(addr: &str, config: RateConfig) -> Result<()> {
    let state = Arc::new(AppState::seeded(config));
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
