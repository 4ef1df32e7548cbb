//! # khata-core: Pure Domain Logic for Khata
//!
//! This crate is the **heart** of Khata. It contains the domain model and all
//! reusable back-office logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Khata Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Calling Application                         │   │
//! │  │    List views ──► Edit forms ──► Option pickers ──► Save        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ khata-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  entity   │  │   wire    │  │   form    │  │   │
//! │  │   │   Sale    │  │  identity │  │ date codec│  │  schemas  │  │   │
//! │  │   │ Purchase  │  │   merge   │  │ ISO-8601  │  │ required? │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    khata-client (REST Layer)                    │   │
//! │  │           reqwest transport, find/query/create/update           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity record types (Sale, Purchase, Employee, etc.)
//! - [`entity`] - The [`Entity`] trait, identity comparison, merge-if-missing
//! - [`wire`] - ISO-8601 wire date codec
//! - [`form`] - Static form field schemas and the required-field check
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use khata_core::entity::merge_missing;
//! use khata_core::types::Supplier;
//!
//! // Seed a supplier picker: the currently referenced supplier must appear
//! // even when it is absent from the queried page.
//! let page: Vec<Supplier> = vec![];
//! let current = Supplier {
//!     id: Some(7),
//!     name: Some("Madina Traders".to_string()),
//!     ..Supplier::default()
//! };
//!
//! let options = merge_missing(page, vec![Some(current)]);
//! assert_eq!(options.len(), 1);
//! assert_eq!(options[0].id, Some(7));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod entity;
pub mod error;
pub mod form;
pub mod types;
pub mod validation;
pub mod wire;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use khata_core::Entity` instead of
// `use khata_core::entity::Entity`

pub use entity::{equal_by_identity, merge_missing, Entity};
pub use error::{CoreError, ValidationError};
pub use form::{FieldKind, FieldSpec};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length for entity display names.
///
/// ## Business Reason
/// Keeps names printable on receipts and narrow list columns.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for free-text notes and memos.
pub const MAX_NOTES_LEN: usize = 1000;

/// Maximum quantity for a single purchase or sale line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 9999;
