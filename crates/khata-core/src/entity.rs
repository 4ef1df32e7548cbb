//! # Entity Identity & Collection Merging
//!
//! The [`Entity`] trait plus the two identity helpers every back-office
//! screen leans on: identity comparison and merge-if-missing.
//!
//! ## Why Merge-If-Missing?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Seeding a Related-Entity Picker                            │
//! │                                                                         │
//! │  Editing Sale #41, customer_id = 7                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  query customers (page 1) ──► [ {id:1}, {id:2}, ... {id:20} ]          │
//! │       │                                                                 │
//! │       │   Customer 7 is on page 3 - not in the result!                 │
//! │       ▼                                                                 │
//! │  merge_missing(page, [customer 7])                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [ {id:7}, {id:1}, {id:2}, ... {id:20} ]                               │
//! │       ▲                                                                 │
//! │       └── current selection always present, prepended, never duplicated│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both helpers are pure and total: no I/O, no errors, no panics.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::form::FieldSpec;

// =============================================================================
// Entity Trait
// =============================================================================

/// A flat back-office record with an integer identifier.
///
/// ## Identity Rules
/// - `id() == None` denotes a draft that has never been persisted.
/// - Persisted entities carry a stable positive id assigned by the backend.
/// - Relationships are by id only (reference fields), never nested objects.
///
/// Implemented by every record type in [`crate::types`]; the REST client is
/// generic over this trait, so the six CRUD verbs are written exactly once.
pub trait Entity: Serialize + DeserializeOwned + Default + Send + Sync {
    /// Plural REST resource segment, e.g. `"sale-payments"`.
    const RESOURCE: &'static str;

    /// Human-readable entity name for errors and logs.
    const NAME: &'static str;

    /// Returns the identifier, or `None` for an unpersisted draft.
    fn id(&self) -> Option<i64>;

    /// Static form field schema for this entity (see [`crate::form`]).
    fn fields() -> &'static [FieldSpec];
}

// =============================================================================
// Identity Comparison
// =============================================================================

/// Compares two optional entities by identity.
///
/// ## Rules
/// - Both absent → equal
/// - Exactly one absent → not equal
/// - Both present → id equality
///
/// The relation is symmetric and total; it never panics.
pub fn equal_by_identity<E: Entity>(a: Option<&E>, b: Option<&E>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.id() == b.id(),
        _ => false,
    }
}

// =============================================================================
// Merge-If-Missing
// =============================================================================

/// Merges candidate entities into a collection, deduplicated by identifier.
///
/// Absent candidates are dropped. A surviving candidate is accepted when its
/// id is not already present in `existing` nor claimed by an earlier accepted
/// candidate. Accepted candidates are prepended in the order supplied, ahead
/// of the original collection in its original order.
///
/// ## Fast Path
/// When no candidate survives, the original vector is returned unchanged -
/// same allocation, no copy.
///
/// ## Example
/// ```rust
/// use khata_core::entity::merge_missing;
/// use khata_core::types::Product;
///
/// let existing = vec![
///     Product { id: Some(1), ..Product::default() },
///     Product { id: Some(2), ..Product::default() },
/// ];
/// let merged = merge_missing(
///     existing,
///     vec![
///         Some(Product { id: Some(2), ..Product::default() }),
///         Some(Product { id: Some(3), ..Product::default() }),
///     ],
/// );
///
/// let ids: Vec<_> = merged.iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
/// ```
pub fn merge_missing<E: Entity>(existing: Vec<E>, candidates: Vec<Option<E>>) -> Vec<E> {
    // Track ids as Option so a single id-less draft candidate can still be
    // admitted without colliding with persisted ids.
    let mut seen: HashSet<Option<i64>> = existing.iter().map(Entity::id).collect();

    let mut added: Vec<E> = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        if seen.insert(candidate.id()) {
            added.push(candidate);
        }
    }

    if added.is_empty() {
        return existing;
    }

    added.extend(existing);
    added
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Customer;

    fn customer(id: i64) -> Customer {
        Customer {
            id: Some(id),
            ..Customer::default()
        }
    }

    fn ids(collection: &[Customer]) -> Vec<Option<i64>> {
        collection.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_equal_by_identity_both_absent() {
        assert!(equal_by_identity::<Customer>(None, None));
    }

    #[test]
    fn test_equal_by_identity_one_absent() {
        let a = customer(1);
        assert!(!equal_by_identity(Some(&a), None));
        assert!(!equal_by_identity(None, Some(&a)));
    }

    #[test]
    fn test_equal_by_identity_matches_ids_and_is_symmetric() {
        let a = customer(1);
        let b = customer(1);
        let c = customer(2);

        assert!(equal_by_identity(Some(&a), Some(&b)));
        assert!(equal_by_identity(Some(&b), Some(&a)));
        assert!(!equal_by_identity(Some(&a), Some(&c)));
        assert!(!equal_by_identity(Some(&c), Some(&a)));
    }

    #[test]
    fn test_merge_into_empty_collection() {
        let merged = merge_missing(vec![], vec![Some(customer(5))]);
        assert_eq!(ids(&merged), vec![Some(5)]);
    }

    #[test]
    fn test_merge_drops_known_candidate() {
        let existing = vec![customer(1), customer(2)];
        let merged = merge_missing(existing, vec![Some(customer(2))]);
        assert_eq!(merged.len(), 2);
        assert_eq!(ids(&merged), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_merge_prepends_new_candidates_in_order() {
        let existing = vec![customer(1), customer(2)];
        let merged = merge_missing(existing, vec![Some(customer(2)), Some(customer(3))]);
        assert_eq!(ids(&merged), vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn test_merge_deduplicates_among_candidates() {
        let merged = merge_missing(
            vec![customer(1)],
            vec![Some(customer(4)), Some(customer(4)), Some(customer(5))],
        );
        assert_eq!(ids(&merged), vec![Some(4), Some(5), Some(1)]);
    }

    #[test]
    fn test_merge_absent_candidates_returns_same_allocation() {
        let existing = vec![customer(1), customer(2)];
        let pointer = existing.as_ptr();

        let merged = merge_missing(existing, vec![None, None]);

        assert_eq!(merged.as_ptr(), pointer);
        assert_eq!(ids(&merged), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge_missing(vec![customer(1)], vec![Some(customer(2))]);
        let twice = merge_missing(once.clone(), vec![Some(customer(2))]);
        assert_eq!(ids(&once), ids(&twice));
    }
}
