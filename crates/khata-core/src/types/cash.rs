//! Cash drawer entities: running balance, individual movements, and the
//! end-of-day reconciliation sheet.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::AuditFields;
use crate::entity::Entity;
use crate::form::{FieldKind, FieldSpec};

// =============================================================================
// Flow Direction
// =============================================================================

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    /// Money entering the drawer.
    Inflow,
    /// Money leaving the drawer.
    Outflow,
}

// =============================================================================
// Cash Balance
// =============================================================================

/// A snapshot of the cash drawer balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashBalance {
    pub id: Option<i64>,

    /// Balance in cents at the snapshot instant.
    pub balance_cents: Option<i64>,

    /// When the snapshot was taken.
    #[serde(default, with = "crate::wire::instant")]
    pub as_of: Option<DateTime<Utc>>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for CashBalance {
    const RESOURCE: &'static str = "cash-balances";
    const NAME: &'static str = "CashBalance";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("balanceCents", FieldKind::Money),
            FieldSpec::required("asOf", FieldKind::Instant),
        ];
        FIELDS
    }
}

// =============================================================================
// Cash Transaction
// =============================================================================

/// A single cash movement in or out of the drawer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashTransaction {
    pub id: Option<i64>,

    pub direction: Option<FlowDirection>,

    /// Movement amount in cents, always non-negative; the direction carries
    /// the sign.
    pub amount_cents: Option<i64>,

    #[serde(default, with = "crate::wire::instant")]
    pub occurred_at: Option<DateTime<Utc>>,

    /// Short note shown in the drawer journal.
    pub memo: Option<String>,

    /// Employee who handled the movement.
    pub employee_id: Option<i64>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl CashTransaction {
    /// Returns the amount with the direction applied: positive for inflows,
    /// negative for outflows, `None` while either field is unset.
    pub fn signed_amount_cents(&self) -> Option<i64> {
        let amount = self.amount_cents?;
        match self.direction? {
            FlowDirection::Inflow => Some(amount),
            FlowDirection::Outflow => Some(-amount),
        }
    }
}

impl Entity for CashTransaction {
    const RESOURCE: &'static str = "cash-transactions";
    const NAME: &'static str = "CashTransaction";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("direction", FieldKind::Text),
            FieldSpec::required("amountCents", FieldKind::Money),
            FieldSpec::required("occurredAt", FieldKind::Instant),
            FieldSpec::optional("memo", FieldKind::Text),
            FieldSpec::optional("employeeId", FieldKind::Reference),
        ];
        FIELDS
    }
}

// =============================================================================
// Daily Cash Reconciliation
// =============================================================================

/// The end-of-day cash count sheet for one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCashReconciliation {
    pub id: Option<i64>,

    #[serde(default, with = "crate::wire::date")]
    pub reconciliation_date: Option<NaiveDate>,

    /// Drawer balance at opening, in cents.
    pub opening_cents: Option<i64>,

    /// Expected balance at close per the journal, in cents.
    pub expected_cents: Option<i64>,

    /// Physically counted balance at close, in cents.
    pub counted_cents: Option<i64>,

    /// Recorded variance (counted − expected), in cents.
    pub variance_cents: Option<i64>,

    pub notes: Option<String>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl DailyCashReconciliation {
    /// Variance implied by the counted and expected balances, `None` while
    /// either is unset. The stored `variance_cents` is what the user saved;
    /// this is what the numbers say.
    pub fn computed_variance_cents(&self) -> Option<i64> {
        Some(self.counted_cents? - self.expected_cents?)
    }

    /// True when the drawer balanced to the cent.
    pub fn is_balanced(&self) -> bool {
        self.computed_variance_cents() == Some(0)
    }
}

impl Entity for DailyCashReconciliation {
    const RESOURCE: &'static str = "daily-cash-reconciliations";
    const NAME: &'static str = "DailyCashReconciliation";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("reconciliationDate", FieldKind::Date),
            FieldSpec::required("openingCents", FieldKind::Money),
            FieldSpec::required("expectedCents", FieldKind::Money),
            FieldSpec::required("countedCents", FieldKind::Money),
            FieldSpec::optional("varianceCents", FieldKind::Money),
            FieldSpec::optional("notes", FieldKind::Text),
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
    fn test_signed_amount() {
        let mut txn = CashTransaction {
            direction: Some(FlowDirection::Inflow),
            amount_cents: Some(1500),
            ..CashTransaction::default()
        };
        assert_eq!(txn.signed_amount_cents(), Some(1500));

        txn.direction = Some(FlowDirection::Outflow);
        assert_eq!(txn.signed_amount_cents(), Some(-1500));

        txn.amount_cents = None;
        assert_eq!(txn.signed_amount_cents(), None);
    }

    #[test]
    fn test_reconciliation_variance() {
        let sheet = DailyCashReconciliation {
            expected_cents: Some(120_00),
            counted_cents: Some(118_50),
            ..DailyCashReconciliation::default()
        };
        assert_eq!(sheet.computed_variance_cents(), Some(-150));
        assert!(!sheet.is_balanced());
    }

    #[test]
    fn test_reconciliation_date_wire_form() {
        let sheet = DailyCashReconciliation {
            reconciliation_date: NaiveDate::from_ymd_opt(2025, 7, 27),
            ..DailyCashReconciliation::default()
        };
        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json["reconciliationDate"], "2025-07-27");
    }
}
