//! People and payroll entities: staff, trading partners, and salary payments.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{AuditFields, PaymentMethod};
use crate::entity::Entity;
use crate::form::{FieldKind, FieldSpec};

// =============================================================================
// Employee
// =============================================================================

/// A staff member on the payroll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i64>,

    pub name: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    /// Agreed monthly salary in cents.
    pub monthly_salary_cents: Option<i64>,

    /// First working day.
    #[serde(default, with = "crate::wire::date")]
    pub joined_on: Option<NaiveDate>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Employee {
    const RESOURCE: &'static str = "employees";
    const NAME: &'static str = "Employee";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::optional("phone", FieldKind::Text),
            FieldSpec::optional("address", FieldKind::Text),
            FieldSpec::optional("monthlySalaryCents", FieldKind::Money),
            FieldSpec::optional("joinedOn", FieldKind::Date),
        ];
        FIELDS
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer with an optional running credit balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<i64>,

    pub name: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    /// Balance carried over when the account was opened, in cents.
    pub opening_balance_cents: Option<i64>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Customer {
    const RESOURCE: &'static str = "customers";
    const NAME: &'static str = "Customer";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::optional("phone", FieldKind::Text),
            FieldSpec::optional("address", FieldKind::Text),
            FieldSpec::optional("openingBalanceCents", FieldKind::Money),
        ];
        FIELDS
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier the shop purchases stock from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Option<i64>,

    pub name: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    /// Balance carried over when the account was opened, in cents.
    pub opening_balance_cents: Option<i64>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for Supplier {
    const RESOURCE: &'static str = "suppliers";
    const NAME: &'static str = "Supplier";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::optional("phone", FieldKind::Text),
            FieldSpec::optional("address", FieldKind::Text),
            FieldSpec::optional("openingBalanceCents", FieldKind::Money),
        ];
        FIELDS
    }
}

// =============================================================================
// Salary Payment
// =============================================================================

/// A salary disbursement to one employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPayment {
    pub id: Option<i64>,

    /// Employee receiving the payment.
    pub employee_id: Option<i64>,

    /// Amount paid in cents.
    pub amount_cents: Option<i64>,

    /// Salary period covered, e.g. "2025-07".
    pub period: Option<String>,

    pub method: Option<PaymentMethod>,

    #[serde(default, with = "crate::wire::instant")]
    pub paid_at: Option<DateTime<Utc>>,

    pub notes: Option<String>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Entity for SalaryPayment {
    const RESOURCE: &'static str = "salary-payments";
    const NAME: &'static str = "SalaryPayment";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("employeeId", FieldKind::Reference),
            FieldSpec::required("amountCents", FieldKind::Money),
            FieldSpec::required("paidAt", FieldKind::Instant),
            FieldSpec::optional("period", FieldKind::Text),
            FieldSpec::optional("method", FieldKind::Text),
            FieldSpec::optional("notes", FieldKind::Text),
        ];
        FIELDS
    }
}
