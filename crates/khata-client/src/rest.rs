//! # Generic REST Client
//!
//! The six CRUD verbs over HTTP, written once for every entity.
//!
//! ## Verb Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    RestClient Verb Map                                  │
//! │                                                                         │
//! │  find<E>(id)              GET    {base}/api/{resource}/{id}            │
//! │  query<E>(query)          GET    {base}/api/{resource}?page&size&sort  │
//! │  create<E>(draft)         POST   {base}/api/{resource}                 │
//! │  update<E>(entity)        PUT    {base}/api/{resource}/{id}            │
//! │  partial_update<E>(patch) PATCH  {base}/api/{resource}/{id}            │
//! │  delete<E>(id)            DELETE {base}/api/{resource}/{id}            │
//! │                                                                         │
//! │  {resource} = E::RESOURCE ("sales", "salary-payments", ...)            │
//! │                                                                         │
//! │  Preconditions                                                         │
//! │  ─────────────                                                         │
//! │  create  → draft must have id == None, required fields filled          │
//! │  update  → entity must have an id, required fields filled              │
//! │  patch   → entity must have an id                                      │
//! │  delete  → id only                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! # async fn run() -> Result<(), khata_client::ApiError> {
//! use khata_client::{ApiConfig, RestClient};
//! use khata_core::types::Employee;
//!
//! let client = RestClient::new(ApiConfig::load().map_err(|e| {
//!     khata_client::ApiError::Transport(e.to_string())
//! })?)?;
//!
//! let employee: Employee = client.find(12).await?;
//! # let _ = employee;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::debug;

use khata_core::{form, Entity};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::query::{Page, Query};

/// Response header carrying the total row count for paginated queries.
const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Content type for PATCH bodies: only the fields present are applied.
const MERGE_PATCH: &str = "application/merge-patch+json";

// =============================================================================
// Rest Client
// =============================================================================

/// Generic REST client for back-office entities.
///
/// ## Usage
/// ```rust,no_run
/// # use khata_client::{ApiConfig, RestClient, Query};
/// # use khata_core::types::Sale;
/// # async fn run() -> Result<(), khata_client::ApiError> {
/// let client = RestClient::new(ApiConfig::with_base_url("http://localhost:8080"))?;
///
/// // One page of sales, newest first
/// let page = client.query::<Sale>(&Query::new().size(20).sort("saleDate,desc")).await?;
/// # let _ = page;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl RestClient {
    /// Creates a client with a per-request timeout from the configuration.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::from)?;

        Ok(RestClient { http, config })
    }

    /// Collection URL for an entity type: `{base}/{root}/{resource}`.
    fn collection_url<E: Entity>(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_root.trim_matches('/'),
            E::RESOURCE
        )
    }

    /// Item URL for an entity type: `{base}/{root}/{resource}/{id}`.
    fn item_url<E: Entity>(&self, id: i64) -> String {
        format!("{}/{}", self.collection_url::<E>(), id)
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Fetches one entity by id.
    ///
    /// ## Returns
    /// * `Ok(entity)` - found
    /// * `Err(ApiError::NotFound)` - backend answered 404
    pub async fn find<E: Entity>(&self, id: i64) -> ApiResult<E> {
        let url = self.item_url::<E>(id);
        debug!(entity = E::NAME, id, "Fetching entity");

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(E::NAME, id));
        }

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetches one page of a collection.
    ///
    /// The total row count comes from the `X-Total-Count` response header;
    /// when the backend omits it, the page length is used.
    pub async fn query<E: Entity>(&self, query: &Query) -> ApiResult<Page<E>> {
        let url = self.collection_url::<E>();
        debug!(entity = E::NAME, "Querying collection");

        let response = self
            .http
            .get(&url)
            .query(&query.params())
            .send()
            .await?;
        let response = check_status(response).await?;

        let total_header = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok());

        let items: Vec<E> = response.json().await?;
        let total = total_header.unwrap_or(items.len() as i64);

        debug!(entity = E::NAME, count = items.len(), total, "Query returned page");
        Ok(Page { items, total })
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Creates a new entity from a draft.
    ///
    /// The draft must not carry an id and must pass its form schema. The
    /// returned entity is the authoritative persisted form: server-assigned
    /// id, server-computed audit fields.
    pub async fn create<E: Entity>(&self, draft: &E) -> ApiResult<E> {
        if let Some(id) = draft.id() {
            return Err(ApiError::AlreadyPersisted {
                entity: E::NAME,
                id,
            });
        }
        form::validate_for_save(draft)?;

        let url = self.collection_url::<E>();
        debug!(entity = E::NAME, "Creating entity");

        let response = self.http.post(&url).json(draft).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Replaces a persisted entity wholesale.
    pub async fn update<E: Entity>(&self, entity: &E) -> ApiResult<E> {
        let id = entity
            .id()
            .ok_or(ApiError::MissingId { entity: E::NAME })?;
        form::validate_for_save(entity)?;

        let url = self.item_url::<E>(id);
        debug!(entity = E::NAME, id, "Updating entity");

        let response = self.http.put(&url).json(entity).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(E::NAME, id));
        }

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Applies the set fields of `patch` to a persisted entity.
    ///
    /// Unset (`null`) fields are stripped from the body, so only the fields
    /// the caller filled in are touched - merge-patch semantics. No form
    /// schema check here: a partial body is the point.
    pub async fn partial_update<E: Entity>(&self, patch: &E) -> ApiResult<E> {
        let id = patch
            .id()
            .ok_or(ApiError::MissingId { entity: E::NAME })?;

        let body = merge_patch_body(patch)?;
        let url = self.item_url::<E>(id);
        debug!(entity = E::NAME, id, "Patching entity");

        // Serialize by hand instead of `.json()`: that helper would set
        // `application/json` and the merge-patch media type must be the only
        // Content-Type value the backend sees.
        let bytes = serde_json::to_vec(&body)
            .map_err(khata_core::CoreError::from)
            .map_err(ApiError::from)?;

        let response = self
            .http
            .patch(&url)
            .header(CONTENT_TYPE, MERGE_PATCH)
            .body(bytes)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(E::NAME, id));
        }

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Deletes a persisted entity by id.
    pub async fn delete<E: Entity>(&self, id: i64) -> ApiResult<()> {
        let url = self.item_url::<E>(id);
        debug!(entity = E::NAME, id, "Deleting entity");

        let response = self.http.delete(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(E::NAME, id));
        }

        check_status(response).await?;
        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Maps non-success statuses to `ApiError::Status` with the response body as
/// context.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Serializes an entity and strips top-level `null` fields, leaving only the
/// fields the caller set.
fn merge_patch_body<E: Entity>(patch: &E) -> ApiResult<Value> {
    let mut value = serde_json::to_value(patch)
        .map_err(khata_core::CoreError::from)
        .map_err(ApiError::from)?;

    if let Value::Object(object) = &mut value {
        object.retain(|_, v| !v.is_null());
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use khata_core::types::{DailyCashReconciliation, SalePayment};

    fn client() -> RestClient {
        RestClient::new(ApiConfig::with_base_url("http://localhost:8080/")).unwrap()
    }

    #[test]
    fn test_collection_url_trims_slashes() {
        let client = client();
        assert_eq!(
            client.collection_url::<SalePayment>(),
            "http://localhost:8080/api/sale-payments"
        );
    }

    #[test]
    fn test_item_url() {
        let client = client();
        assert_eq!(
            client.item_url::<DailyCashReconciliation>(9),
            "http://localhost:8080/api/daily-cash-reconciliations/9"
        );
    }

    #[test]
    fn test_merge_patch_body_strips_unset_fields() {
        let patch = SalePayment {
            id: Some(3),
            amount_cents: Some(750),
            ..SalePayment::default()
        };

        let body = merge_patch_body(&patch).unwrap();
        let object = body.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["id"], 3);
        assert_eq!(object["amountCents"], 750);
        assert!(!object.contains_key("saleId"));
        assert!(!object.contains_key("paidAt"));
    }
}
