//! Stock entities: the product catalogue and inventory movements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AuditFields;
use crate::entity::Entity;
use crate::form::{FieldKind, FieldSpec};

// =============================================================================
// Stock Movement
// =============================================================================

/// Why stock changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockMovement {
    /// Goods received (purchases, returns from customers).
    Inbound,
    /// Goods issued (sales, returns to suppliers).
    Outbound,
    /// Manual correction after a stock count.
    Adjustment,
}

// =============================================================================
// Product
// =============================================================================

/// A catalogue item available for purchase and sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<i64>,

    /// Stock Keeping Unit - business identifier.
    pub sku: Option<String>,

    pub name: Option<String>,

    /// Unit of measure shown on lines ("pc", "kg", "box").
    pub unit: Option<String>,

    /// Selling price in cents.
    pub price_cents: Option<i64>,

    /// Purchase cost in cents (for margin reporting).
    pub cost_cents: Option<i64>,

    /// Current stock level.
    pub current_stock: Option<i64>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Product {
    /// Checks whether `quantity` units can be issued from current stock.
    /// Unknown stock means the product is not stock-tracked.
    pub fn can_issue(&self, quantity: i64) -> bool {
        match self.current_stock {
            Some(stock) => stock >= quantity,
            None => true,
        }
    }
}

impl Entity for Product {
    const RESOURCE: &'static str = "products";
    const NAME: &'static str = "Product";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::required("priceCents", FieldKind::Money),
            FieldSpec::optional("sku", FieldKind::Text),
            FieldSpec::optional("unit", FieldKind::Text),
            FieldSpec::optional("costCents", FieldKind::Money),
            FieldSpec::optional("currentStock", FieldKind::Integer),
        ];
        FIELDS
    }
}

// =============================================================================
// Inventory Transaction
// =============================================================================

/// A single stock movement for one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransaction {
    pub id: Option<i64>,

    pub product_id: Option<i64>,

    pub movement: Option<StockMovement>,

    /// Units moved, always non-negative; the movement kind carries the sign.
    pub quantity: Option<i64>,

    #[serde(default, with = "crate::wire::instant")]
    pub recorded_at: Option<DateTime<Utc>>,

    /// Document reference (purchase invoice, receipt number).
    pub reference: Option<String>,

    pub active: Option<bool>,

    #[serde(flatten)]
    pub audit: AuditFields,
}

impl InventoryTransaction {
    /// Returns the quantity with the movement sign applied: positive for
    /// inbound, negative for outbound, as-is for adjustments.
    pub fn signed_quantity(&self) -> Option<i64> {
        let quantity = self.quantity?;
        match self.movement? {
            StockMovement::Inbound => Some(quantity),
            StockMovement::Outbound => Some(-quantity),
            StockMovement::Adjustment => Some(quantity),
        }
    }
}

impl Entity for InventoryTransaction {
    const RESOURCE: &'static str = "inventory-transactions";
    const NAME: &'static str = "InventoryTransaction";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::required("productId", FieldKind::Reference),
            FieldSpec::required("movement", FieldKind::Text),
            FieldSpec::required("quantity", FieldKind::Integer),
            FieldSpec::required("recordedAt", FieldKind::Instant),
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
    fn test_can_issue() {
        let tracked = Product {
            current_stock: Some(3),
            ..Product::default()
        };
        assert!(tracked.can_issue(3));
        assert!(!tracked.can_issue(4));

        let untracked = Product::default();
        assert!(untracked.can_issue(1000));
    }

    #[test]
    fn test_signed_quantity() {
        let mut movement = InventoryTransaction {
            movement: Some(StockMovement::Inbound),
            quantity: Some(10),
            ..InventoryTransaction::default()
        };
        assert_eq!(movement.signed_quantity(), Some(10));

        movement.movement = Some(StockMovement::Outbound);
        assert_eq!(movement.signed_quantity(), Some(-10));

        movement.movement = None;
        assert_eq!(movement.signed_quantity(), None);
    }
}
