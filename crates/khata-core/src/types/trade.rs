//! Trading entities: purchases and sales, their line operations, and their
//! payments.
//!
//! A purchase or sale is a flat header; its lines and payments are separate
//! entities referencing it by id. Nothing nests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{AuditFields, PaymentMethod};
use crate::entity::Entity;
use crate::form::{FieldKind, FieldSpec};

// =============================================================================
// Purchase
// =============================================================================

/// A stock purchase from a supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: Option<i64>,

    pub supplier_id: Option<i64>,

    /// Supplier invoice number.
    pub invoice_number: Option<String>,

    #[serde(default, with = "crate::wire::date")]
    pub purchase_date: Option<NaiveDate>,

    /// Invoice total in cents.
    pub total_cents: Option<i64>,

    pub notes: Option<String>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Purchase {
    const RESOURCE: &'static str = "purchases";
    const NAME: &'static str = "Purchase";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("supplierId", FieldKind::Reference),
            FieldSpec::required("purchaseDate", FieldKind::Date),
            FieldSpec::required("totalCents", FieldKind::Money),
            FieldSpec::optional("invoiceNumber", FieldKind::Text),
            FieldSpec::optional("notes", FieldKind::Text),
        ];
        FIELDS
    }
}

// =============================================================================
// Purchase Operation
// =============================================================================

/// One product line of a purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOperation {
    pub id: Option<i64>,

    pub purchase_id: Option<i64>,

    pub product_id: Option<i64>,

    pub quantity: Option<i64>,

    /// Cost per unit in cents at time of purchase.
    pub unit_cost_cents: Option<i64>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl PurchaseOperation {
    /// Line total (quantity × unit cost), `None` while either field is unset
    /// or the product overflows `i64`.
    pub fn line_total_cents(&self) -> Option<i64> {
        self.quantity?.checked_mul(self.unit_cost_cents?)
    }
}

impl Entity for PurchaseOperation {
    const RESOURCE: &'static str = "purchase-operations";
    const NAME: &'static str = "PurchaseOperation";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("purchaseId", FieldKind::Reference),
            FieldSpec::required("productId", FieldKind::Reference),
            FieldSpec::required("quantity", FieldKind::Integer),
            FieldSpec::required("unitCostCents", FieldKind::Money),
        ];
        FIELDS
    }
}

// =============================================================================
// Purchase Payment
// =============================================================================

/// A payment made against a purchase. A purchase can carry several payments
/// (instalments).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePayment {
    pub id: Option<i64>,

    pub purchase_id: Option<i64>,

    /// Amount paid in cents.
    pub amount_cents: Option<i64>,

    pub method: Option<PaymentMethod>,

    #[serde(default, with = "crate::wire::instant")]
    pub paid_at: Option<DateTime<Utc>>,

    /// External reference (cheque number, transfer id).
    pub reference: Option<String>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for PurchasePayment {
    const RESOURCE: &'static str = "purchase-payments";
    const NAME: &'static str = "PurchasePayment";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("purchaseId", FieldKind::Reference),
            FieldSpec::required("amountCents", FieldKind::Money),
            FieldSpec::required("paidAt", FieldKind::Instant),
            FieldSpec::optional("method", FieldKind::Text),
            FieldSpec::optional("reference", FieldKind::Text),
        ];
        FIELDS
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A sale to a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Option<i64>,

    /// Buying customer; walk-in sales leave this unset.
    pub customer_id: Option<i64>,

    pub receipt_number: Option<String>,

    #[serde(default, with = "crate::wire::date")]
    pub sale_date: Option<NaiveDate>,

    /// Receipt total in cents.
    pub total_cents: Option<i64>,

    pub notes: Option<String>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Sale {
    const RESOURCE: &'static str = "sales";
    const NAME: &'static str = "Sale";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("saleDate", FieldKind::Date),
            FieldSpec::required("totalCents", FieldKind::Money),
            FieldSpec::optional("customerId", FieldKind::Reference),
            FieldSpec::optional("receiptNumber", FieldKind::Text),
            FieldSpec::optional("notes", FieldKind::Text),
        ];
        FIELDS
    }
}

// =============================================================================
// Sale Operation
// =============================================================================

/// One product line of a sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOperation {
    pub id: Option<i64>,

    pub sale_id: Option<i64>,

    pub product_id: Option<i64>,

    pub quantity: Option<i64>,

    /// Price per unit in cents at time of sale.
    pub unit_price_cents: Option<i64>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl SaleOperation {
    /// Line total (quantity × unit price), `None` while either field is unset
    /// or the product overflows `i64`.
    pub fn line_total_cents(&self) -> Option<i64> {
        self.quantity?.checked_mul(self.unit_price_cents?)
    }
}

impl Entity for SaleOperation {
    const RESOURCE: &'static str = "sale-operations";
    const NAME: &'static str = "SaleOperation";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("saleId", FieldKind::Reference),
            FieldSpec::required("productId", FieldKind::Reference),
            FieldSpec::required("quantity", FieldKind::Integer),
            FieldSpec::required("unitPriceCents", FieldKind::Money),
        ];
        FIELDS
    }
}

// =============================================================================
// Sale Payment
// =============================================================================

/// A payment received against a sale. Split tenders produce several payments
/// for one sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePayment {
    pub id: Option<i64>,

    pub sale_id: Option<i64>,

    /// Amount received in cents.
    pub amount_cents: Option<i64>,

    pub method: Option<PaymentMethod>,

    #[serde(default, with = "crate::wire::instant")]
    pub paid_at: Option<DateTime<Utc>>,

    /// External reference (card auth code, transfer id).
    pub reference: Option<String>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for SalePayment {
    const RESOURCE: &'static str = "sale-payments";
    const NAME: &'static str = "SalePayment";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("saleId", FieldKind::Reference),
            FieldSpec::required("amountCents", FieldKind::Money),
            FieldSpec::required("paidAt", FieldKind::Instant),
            FieldSpec::optional("method", FieldKind::Text),
            FieldSpec::optional("reference", FieldKind::Text),
        ];
        FIELDS
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_totals() {
        let line = SaleOperation {
            quantity: Some(3),
            unit_price_cents: Some(2500),
            ..SaleOperation::default()
        };
        assert_eq!(line.line_total_cents(), Some(7500));

        let incomplete = PurchaseOperation {
            quantity: Some(3),
            ..PurchaseOperation::default()
        };
        assert_eq!(incomplete.line_total_cents(), None);
    }

    #[test]
    fn test_line_total_overflow_is_none() {
        let line = SaleOperation {
            quantity: Some(i64::MAX),
            unit_price_cents: Some(2),
            ..SaleOperation::default()
        };
        assert_eq!(line.line_total_cents(), None);

        let line = PurchaseOperation {
            quantity: Some(i64::MAX),
            unit_cost_cents: Some(2),
            ..PurchaseOperation::default()
        };
        assert_eq!(line.line_total_cents(), None);
    }

    #[test]
    fn test_payment_method_wire_form() {
        let payment = SalePayment {
            method: Some(PaymentMethod::BankTransfer),
            ..SalePayment::default()
        };
        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["method"], "bank_transfer");
    }
}
