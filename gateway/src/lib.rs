//! Settlement Gateway
//!
//! HTTP/JSON front end for the settlement engine.
//!
//! # Endpoints
//!
//! - `POST /balance/calculate`: transfers in, balances out
//! - `POST /transaction/minimize`: balances in, settlement statement out
//! - `GET /health`: liveness
//!
//! Both `POST` endpoints require `Content-Type: application/json` and answer
//! `400 Bad Request` when it is missing or the body does not decode.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod telemetry;

// Re-exports
pub use config::Config;
pub use error::{GatewayError, Result};
pub use handlers::AppState;
pub use server::{router, serve};
