//! # Entity Types
//!
//! Record types for every back-office entity.
//!
//! ## Record Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Entity Anatomy                                  │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────┐              │
//! │  │  Sale                                                │              │
//! │  │  ───────────────────────────────────────────────     │              │
//! │  │  id: Option<i64>         ← None until persisted      │              │
//! │  │  customer_id: Option<i64>← reference (id only)       │              │
//! │  │  sale_date: NaiveDate    ← wire "YYYY-MM-DD"         │              │
//! │  │  total_cents: i64        ← integer money, no floats  │              │
//! │  │  active: Option<bool>    ← soft-delete flag          │              │
//! │  │  audit: AuditFields      ← flattened, server-owned   │              │
//! │  └──────────────────────────────────────────────────────┘              │
//! │                                                                         │
//! │  Wire form: flat camelCase JSON, dates as strings (see wire module)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field except `id` is optional: a draft starts empty and the
//! required-field schema in [`crate::form`] decides what must be filled
//! before save. No entity nests another; relationships are id references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod cash;
mod inventory;
mod people;
mod trade;

pub use cash::{CashBalance, CashTransaction, DailyCashReconciliation, FlowDirection};
pub use inventory::{InventoryTransaction, Product, StockMovement};
pub use people::{Customer, Employee, SalaryPayment, Supplier};
pub use trade::{
    Purchase, PurchaseOperation, PurchasePayment, Sale, SaleOperation, SalePayment,
};

// =============================================================================
// Audit Fields
// =============================================================================

/// Server-computed audit trail, shared by every entity.
///
/// The backend owns these values; the client sends whatever it last saw and
/// the server overwrites them on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
    /// Login of the user who created the record.
    pub created_by: Option<String>,

    /// When the record was created.
    #[serde(default, with = "crate::wire::instant")]
    pub created_date: Option<DateTime<Utc>>,

    /// Login of the user who last modified the record.
    pub last_modified_by: Option<String>,

    /// When the record was last modified.
    #[serde(default, with = "crate::wire::instant")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a payment was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash.
    Cash,
    /// Bank transfer or cheque.
    BankTransfer,
    /// Card payment on an external terminal.
    ExternalCard,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use chrono::TimeZone;

    #[test]
    fn test_entity_wire_names_are_camel_case() {
        let sale = Sale {
            id: Some(3),
            customer_id: Some(7),
            ..Sale::default()
        };
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["customerId"], 7);
        assert!(json.get("customer_id").is_none());
    }

    #[test]
    fn test_audit_instants_use_wire_form() {
        let employee = Employee {
            audit: AuditFields {
                created_by: Some("admin".to_string()),
                created_date: Some(Utc.with_ymd_and_hms(2025, 7, 27, 13, 48, 0).unwrap()),
                ..AuditFields::default()
            },
            ..Employee::default()
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["createdDate"], "2025-07-27T13:48:00.000Z");

        let back: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(back.audit, employee.audit);
    }

    #[test]
    fn test_draft_deserializes_from_sparse_json() {
        // A detail response may omit optional fields entirely.
        let sale: Sale = serde_json::from_str(r#"{"id": 12, "totalCents": 500}"#).unwrap();
        assert_eq!(sale.id, Some(12));
        assert_eq!(sale.total_cents, Some(500));
        assert_eq!(sale.sale_date, None);
        assert_eq!(sale.audit.created_date, None);
    }

    #[test]
    fn test_resource_segments() {
        assert_eq!(Sale::RESOURCE, "sales");
        assert_eq!(DailyCashReconciliation::RESOURCE, "daily-cash-reconciliations");
        assert_eq!(SalaryPayment::RESOURCE, "salary-payments");
    }
}
