//! HTTP handlers
//!
//! Each handler validates the content type, decodes the body and hands the
//! decoded values to the settlement facade.

use crate::{
    config::Config,
    error::{GatewayError, Result},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use settlement::{Accounting, Balance, BalanceCalculator, Statement, Transfer, TransferMinimizer};
use std::sync::Arc;
use tracing::info;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Netting service
    pub calculator: Arc<dyn BalanceCalculator>,

    /// Minimization service
    pub minimizer: Arc<dyn TransferMinimizer>,

    /// Service name reported by the health check
    pub service_name: Arc<str>,

    /// Service version reported by the health check
    pub service_version: Arc<str>,
}

impl AppState {
    /// Create state from explicit services
    pub fn new(
        calculator: Arc<dyn BalanceCalculator>,
        minimizer: Arc<dyn TransferMinimizer>,
    ) -> Self {
        Self::from_config(&Config::default()).with_services(calculator, minimizer)
    }

    /// Create state with the default services and the configured identity
    pub fn from_config(config: &Config) -> Self {
        Self {
            calculator: Arc::new(Accounting),
            minimizer: Arc::new(Accounting),
            service_name: config.service_name.as_str().into(),
            service_version: config.service_version.as_str().into(),
        }
    }

    /// Replace the settlement services
    pub fn with_services(
        mut self,
        calculator: Arc<dyn BalanceCalculator>,
        minimizer: Arc<dyn TransferMinimizer>,
    ) -> Self {
        self.calculator = calculator;
        self.minimizer = minimizer;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_name", &self.service_name)
            .field("service_version", &self.service_version)
            .finish_non_exhaustive()
    }
}

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: &'static str,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
}

/// Reject requests whose `Content-Type` is not JSON
///
/// Media type parameters such as `charset` are ignored.
pub fn require_json(headers: &HeaderMap) -> Result<()> {
    let is_json = headers
        .get_all(header::CONTENT_TYPE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| {
            value
                .split(';')
                .next()
                .map(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
                .unwrap_or(false)
        });

    if is_json {
        Ok(())
    } else {
        Err(GatewayError::InvalidContentType)
    }
}

fn decode<T: DeserializeOwned>(headers: &HeaderMap, body: &Bytes) -> Result<T> {
    require_json(headers)?;
    Ok(serde_json::from_slice(body)?)
}

/// `POST /balance/calculate`
pub async fn calculate_balances(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Vec<Balance>>> {
    let transfers: Vec<Transfer> = decode(&headers, &body)?;

    let balances = state.calculator.calculate(&transfers)?;
    info!(
        transfers = transfers.len(),
        participants = balances.len(),
        "Calculated balances"
    );

    Ok(Json(balances))
}

/// `POST /transaction/minimize`
pub async fn minimize_transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Statement>> {
    let balances: Vec<Balance> = decode(&headers, &body)?;

    let statement = state.minimizer.minimize(&balances);
    info!(
        balances = balances.len(),
        transactions = statement.transactions.len(),
        settled = statement.is_settled(),
        amount = ?statement.settled_amount(),
        "Minimized transactions"
    );

    Ok(Json(statement))
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service_name.to_string(),
        version: state.service_version.to_string(),
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
