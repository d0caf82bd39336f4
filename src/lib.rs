//! # reqres-contract
//!
//! Contract test suite for the reqres.in user-management REST API.
//!
//! ## Key Features
//!
//! - **Explicit configuration**: base URL and API key travel in a [`ReqresConfig`]
//! - **Typed models**: response bodies decode into per-endpoint structs
//! - **Schema registry**: named JSON Schemas for every validated response
//! - **Contract cases**: the nine checks of the suite, runnable one by one or as a batch
//! - **Distinct failures**: status, field, schema and network problems are separate error variants
//!
//! ## Example
//!
//! ```rust,no_run
//! use reqres_contract::{run_suite, ReqresClient, ReqresConfig, SuiteOptions};
//!
//! # async fn example() -> reqres_contract::ContractResult<()> {
//! let client = ReqresClient::new(ReqresConfig::default())?;
//! let report = run_suite(&client, &SuiteOptions::read_only()).await;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod contract;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod schemas;
pub mod suite;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::{ApiResponse, ReqresClient, UserService};
pub use config::ReqresConfig;
pub use contract::ContractCase;
pub use endpoints::Endpoint;
pub use error::{ContractError, ContractResult};
pub use models::{
    ApiErrorBody, CreatedUser, Credentials, RegisterSuccess, SingleUser, Support, UpdatedUser,
    User, UserPage, UserPayload,
};
pub use schemas::ResponseSchema;
pub use suite::{run_suite, CaseOutcome, Outcome, SuiteOptions, SuiteReport};
