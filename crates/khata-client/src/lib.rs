//! # khata-client: REST Transport for Khata
//!
//! This crate talks to the back-office REST API. It contains exactly one
//! client implementation: every entity type goes through the same six verbs,
//! parameterized by [`khata_core::Entity`].
//!
//! ## Modules
//!
//! - [`rest`] - The generic [`RestClient`]
//! - [`query`] - Paging/sort parameters and the [`Page`] result
//! - [`config`] - Base URL and timeout configuration
//! - [`error`] - Transport error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use khata_client::{ApiConfig, Query, RestClient};
//! use khata_core::types::{Sale, Customer};
//! use khata_core::entity::merge_missing;
//!
//! # async fn run() -> Result<(), khata_client::ApiError> {
//! let client = RestClient::new(ApiConfig::with_base_url("http://localhost:8080"))?;
//!
//! // Load a sale for editing
//! let sale: Sale = client.find(41).await?;
//!
//! // Seed the customer picker: first page, plus the referenced customer
//! let page = client.query::<Customer>(&Query::new().page(0).size(20)).await?;
//! let current = match sale.customer_id {
//!     Some(id) => Some(client.find::<Customer>(id).await?),
//!     None => None,
//! };
//! let options = merge_missing(page.items, vec![current]);
//! # let _ = options;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod query;
pub mod rest;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use query::{Page, Query};
pub use rest::RestClient;
