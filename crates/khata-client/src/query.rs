//! # Query Parameters & Pages
//!
//! Wire-level paging for collection endpoints.
//!
//! ## Paging Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Collection Query                                   │
//! │                                                                         │
//! │  GET /api/sales?page=2&size=20&sort=saleDate,desc&sort=id,asc          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  200 OK                                                                │
//! │  X-Total-Count: 473        ← total rows across all pages               │
//! │  [ {...}, {...}, ... ]     ← one page of entities                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Paging and sorting parameters for a collection query.
///
/// Builder-style; an empty query asks for the backend's default page.
#[derive(Debug, Clone, Default)]
pub struct Query {
    page: Option<u32>,
    size: Option<u32>,
    sort: Vec<String>,
}

impl Query {
    /// An empty query (backend defaults).
    pub fn new() -> Self {
        Query::default()
    }

    /// Zero-based page index.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Page size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Adds a sort clause, e.g. `"saleDate,desc"`. Repeatable; clauses apply
    /// in the order added.
    pub fn sort(mut self, clause: impl Into<String>) -> Self {
        self.sort.push(clause.into());
        self
    }

    /// Renders the request parameters as key/value pairs.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        for clause in &self.sort {
            params.push(("sort", clause.clone()));
        }
        params
    }
}

/// One page of a collection query.
#[derive(Debug, Clone)]
pub struct Page<E> {
    /// The entities on this page.
    pub items: Vec<E>,

    /// Total rows across all pages, from the `X-Total-Count` header.
    /// Falls back to the page length when the backend omits the header.
    pub total: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(Query::new().params().is_empty());
    }

    #[test]
    fn test_params_render_in_order() {
        let query = Query::new().page(2).size(20).sort("saleDate,desc").sort("id,asc");
        assert_eq!(
            query.params(),
            vec![
                ("page", "2".to_string()),
                ("size", "20".to_string()),
                ("sort", "saleDate,desc".to_string()),
                ("sort", "id,asc".to_string()),
            ]
        );
    }
}
