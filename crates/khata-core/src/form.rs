//! # Form Field Schemas
//!
//! Plain data descriptions of entity edit forms: for each entity, a static
//! list of wire field names with a kind and a required flag. No UI framework
//! abstraction - whatever renders the form consumes these specs directly.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Draft → Persisted                                │
//! │                                                                         │
//! │  draft::<Sale>()          Sale { id: None, ..defaults }                │
//! │       │                                                                 │
//! │       ▼   user fills fields                                            │
//! │  validate_for_save(&sale) ← required-field check (THIS MODULE)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  client.create(&sale)     POST → server assigns id + audit fields      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::entity::Entity;
use crate::error::{CoreResult, ValidationError};

// =============================================================================
// Field Specs
// =============================================================================

/// The kind of a form field, for rendering and input coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Plain integer.
    Integer,
    /// Monetary amount in cents.
    Money,
    /// Checkbox.
    Boolean,
    /// Calendar date (wire form `YYYY-MM-DD`).
    Date,
    /// Date-time instant (wire form ISO-8601).
    Instant,
    /// Id of a related entity, rendered as a picker.
    Reference,
}

/// One field of an entity edit form.
///
/// `name` is the wire (camelCase) field name, matching the JSON body the
/// REST layer exchanges, so the required-field check can inspect a
/// serialized draft directly.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// A field the user must fill before save.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            kind,
            required: true,
        }
    }

    /// A field that may stay empty.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            kind,
            required: false,
        }
    }
}

// =============================================================================
// Draft Construction
// =============================================================================

/// Creates an empty draft of an entity: `id == None`, all fields at their
/// defaults.
pub fn draft<E: Entity>() -> E {
    E::default()
}

// =============================================================================
// Required-Field Check
// =============================================================================

/// Returns the wire names of required fields that are absent on `entity`.
///
/// The entity is inspected through its serialized form, so the check is
/// written once for all entity types. A required field counts as absent when
/// it is missing from the JSON object, `null`, or an empty string.
pub fn missing_required<E: Entity>(entity: &E) -> CoreResult<Vec<&'static str>> {
    let value = to_json(entity)?;
    let object = value.as_object();

    let missing = E::fields()
        .iter()
        .filter(|spec| spec.required)
        .filter(|spec| {
            let field = object.and_then(|o| o.get(spec.name));
            match field {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            }
        })
        .map(|spec| spec.name)
        .collect();

    Ok(missing)
}

/// Validates an entity against its form schema before save.
///
/// ## Returns
/// * `Ok(())` - every required field is present
/// * `Err(ValidationError::Required)` - first missing required field
pub fn validate_for_save<E: Entity>(entity: &E) -> CoreResult<()> {
    let missing = missing_required(entity)?;
    match missing.first() {
        Some(field) => Err(ValidationError::Required {
            field: (*field).to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

fn to_json<T: Serialize>(value: &T) -> CoreResult<Value> {
    Ok(serde_json::to_value(value)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Employee, SalaryPayment};
    use chrono::NaiveDate;

    #[test]
    fn test_draft_has_no_id() {
        let employee: Employee = draft();
        assert_eq!(employee.id, None);
    }

    #[test]
    fn test_missing_required_on_empty_draft() {
        let employee: Employee = draft();
        let missing = missing_required(&employee).unwrap();
        assert!(missing.contains(&"name"));
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let employee = Employee {
            name: Some("   ".to_string()),
            ..draft()
        };
        let missing = missing_required(&employee).unwrap();
        assert!(missing.contains(&"name"));
    }

    #[test]
    fn test_validate_for_save_reports_first_missing_field() {
        let payment: SalaryPayment = draft();
        let err = validate_for_save(&payment).unwrap_err();
        assert!(err.to_string().contains("is required"));
    }

    #[test]
    fn test_validate_for_save_accepts_complete_draft() {
        let employee = Employee {
            name: Some("Bilal Ahmed".to_string()),
            monthly_salary_cents: Some(45_000_00),
            joined_on: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..draft()
        };
        assert!(validate_for_save(&employee).is_ok());
    }
}
