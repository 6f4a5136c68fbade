//! Catalog reads: the Firestore store and an in-memory snapshot.

use async_trait::async_trait;
use gudang_commerce::catalog::{Banner, Brand, Product};
use gudang_commerce::CommerceError;
use gudang_core::{CollectionConfig, FirestoreConfig, SiteConfig};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::client::{FetchClient, FetchError, FetchRecord};
use crate::dependency::DependencyTag;
use crate::firestore::{documents_from_run_query, Direction, Document, RunQuery};
use crate::transport::HttpTransport;

/// Error type for store reads.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Record(#[from] CommerceError),

    #[error("Invalid snapshot: {0}")]
    Snapshot(String),
}

/// Read-only access to the catalog collections.
#[async_trait(?Send)]
pub trait CatalogStore {
    /// Banners with `isActive == true`.
    async fn list_active_banners(&self) -> Result<Vec<Banner>, StoreError>;

    /// Brands with `isActive == true`, ordered by name.
    async fn list_active_brands(&self) -> Result<Vec<Brand>, StoreError>;

    /// Products with `status == "active"`, newest first.
    async fn list_recent_active_products(&self, limit: usize)
        -> Result<Vec<Product>, StoreError>;

    /// Every product, ordered by name.
    async fn list_all_products(&self) -> Result<Vec<Product>, StoreError>;

    /// A single product; `None` when no such document exists.
    async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Fetches performed since the last call, for request metrics.
    fn drain_fetch_records(&self) -> Vec<FetchRecord> {
        Vec::new()
    }
}

/// Store backed by the Firestore REST API.
pub struct FirestoreStore<T> {
    client: FetchClient<T>,
    documents_url: String,
    collections: CollectionConfig,
}

impl<T: HttpTransport> FirestoreStore<T> {
    /// Create a store for the configured project.
    pub fn new(transport: T, config: &SiteConfig) -> Self {
        Self::with_parts(transport, &config.firestore, config.collections.clone())
    }

    pub fn with_parts(
        transport: T,
        firestore: &FirestoreConfig,
        collections: CollectionConfig,
    ) -> Self {
        Self {
            client: FetchClient::new(transport).with_api_key(firestore.api_key.clone()),
            documents_url: firestore.documents_url(),
            collections,
        }
    }

    async fn run_query(
        &self,
        query: RunQuery,
        tag: DependencyTag,
    ) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}:runQuery", self.documents_url);
        let response = self.client.post_json(&url, &query.to_json(), tag).await?;
        Ok(documents_from_run_query(&response))
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> CatalogStore for FirestoreStore<T> {
    async fn list_active_banners(&self) -> Result<Vec<Banner>, StoreError> {
        let query =
            RunQuery::collection(&self.collections.banners).where_eq("isActive", json!(true));
        let docs = self.run_query(query, DependencyTag::Banners).await?;
        docs.into_iter().map(decode_record).collect()
    }

    async fn list_active_brands(&self) -> Result<Vec<Brand>, StoreError> {
        let query = RunQuery::collection(&self.collections.brands)
            .where_eq("isActive", json!(true))
            .order_by("name", Direction::Ascending);
        let docs = self.run_query(query, DependencyTag::Brands).await?;
        docs.into_iter().map(decode_record).collect()
    }

    async fn list_recent_active_products(
        &self,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError> {
        let query = RunQuery::collection(&self.collections.products)
            .where_eq("status", json!("active"))
            .order_by("createdAt", Direction::Descending)
            .limit(limit);
        let docs = self.run_query(query, DependencyTag::Products).await?;
        docs.into_iter().map(decode_product).collect()
    }

    async fn list_all_products(&self) -> Result<Vec<Product>, StoreError> {
        let query = RunQuery::collection(&self.collections.products)
            .order_by("name", Direction::Ascending);
        let docs = self.run_query(query, DependencyTag::Products).await?;
        docs.into_iter().map(decode_product).collect()
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        if id.is_empty() {
            return Ok(None);
        }

        let url = format!(
            "{}/{}/{}",
            self.documents_url,
            urlencoding::encode(&self.collections.products),
            urlencoding::encode(id)
        );
        match self.client.get_json(&url, DependencyTag::Products).await {
            Ok(resource) => match Document::from_resource(&resource) {
                Some(doc) => decode_product(doc).map(Some),
                None => Err(FetchError::Decode("document without a name".to_string()).into()),
            },
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn drain_fetch_records(&self) -> Vec<FetchRecord> {
        self.client.drain_records()
    }
}

fn decode_product(doc: Document) -> Result<Product, StoreError> {
    Ok(Product::from_document(&doc.id, doc.fields)?)
}

fn decode_record<R: DeserializeOwned>(doc: Document) -> Result<R, StoreError> {
    let id = doc.id.clone();
    serde_json::from_value(doc.into_record()).map_err(|e| {
        StoreError::Record(CommerceError::InvalidRecord {
            id,
            message: e.to_string(),
        })
    })
}

/// Store over an in-memory snapshot, with the same filters and orderings
/// as the Firestore queries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl MemoryStore {
    pub fn new(banners: Vec<Banner>, brands: Vec<Brand>, products: Vec<Product>) -> Self {
        Self {
            banners,
            brands,
            products,
        }
    }

    /// Load a `{ "banners": [..], "brands": [..], "products": [..] }` export.
    pub fn from_json_str(content: &str) -> Result<Self, StoreError> {
        serde_json::from_str(content).map_err(|e| StoreError::Snapshot(e.to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogStore for MemoryStore {
    async fn list_active_banners(&self) -> Result<Vec<Banner>, StoreError> {
        Ok(self.banners.iter().filter(|b| b.is_active).cloned().collect())
    }

    async fn list_active_brands(&self) -> Result<Vec<Brand>, StoreError> {
        let mut brands: Vec<Brand> = self.brands.iter().filter(|b| b.is_active).cloned().collect();
        brands.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(brands)
    }

    async fn list_recent_active_products(
        &self,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.status.as_deref() == Some("active"))
            .cloned()
            .collect();
        // RFC 3339 timestamps order lexicographically.
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        products.truncate(limit);
        Ok(products)
    }

    async fn list_all_products(&self) -> Result<Vec<Product>, StoreError> {
        // Byte order, like Firestore's `orderBy`. The catalog page re-sorts
        // with `filter_and_sort`, so this order only shows for an unknown
        // `sort` value.
        let mut products = self.products.clone();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.products.iter().find(|p| p.id.as_str() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::ScriptedTransport;
    use futures::executor::block_on;

    const RUN_QUERY_PRODUCTS: &str = r#"[
        { "document": { "name": "projects/p/databases/(default)/documents/products/p1",
            "fields": {
                "name": { "stringValue": "Boxer Pro" },
                "retailPrice": { "integerValue": "100000" },
                "discountPrice": { "integerValue": "80000" },
                "status": { "stringValue": "active" }
            } }, "readTime": "2024-01-01T00:00:00Z" },
        { "readTime": "2024-01-01T00:00:00Z" }
    ]"#;

    fn firestore(transport: ScriptedTransport) -> FirestoreStore<ScriptedTransport> {
        FirestoreStore::new(transport, &SiteConfig::default())
    }

    #[test]
    fn test_recent_products_query_and_decode() {
        let store = firestore(ScriptedTransport::default().reply(200, RUN_QUERY_PRODUCTS));
        let products = block_on(store.list_recent_active_products(8)).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "p1");
        assert_eq!(products[0].retail_price, 100_000);
        assert_eq!(products[0].discount_price, Some(80_000));

        let requests = store.client_requests();
        assert!(requests[0].url.ends_with("/databases/(default)/documents:runQuery"));
        let body: serde_json::Value =
            serde_json::from_slice(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["structuredQuery"]["limit"], 8);
        assert_eq!(body["structuredQuery"]["orderBy"][0]["field"]["fieldPath"], "createdAt");

        let records = store.drain_fetch_records();
        assert_eq!(records[0].tag, DependencyTag::Products);
        assert!(records[0].error.is_none());
    }

    #[test]
    fn test_banners_decode() {
        let body = r#"[{ "document": { "name": "x/banners/b1", "fields": {
            "name": { "stringValue": "Promo" },
            "photoUrl": { "stringValue": "https://img/b1.jpg" },
            "isActive": { "booleanValue": true }
        } } }]"#;
        let store = firestore(ScriptedTransport::default().reply(200, body));
        let banners = block_on(store.list_active_banners()).unwrap();
        assert_eq!(banners[0].id.as_str(), "b1");
        assert_eq!(banners[0].photo_url, "https://img/b1.jpg");
        assert_eq!(banners[0].target(), None);
    }

    #[test]
    fn test_get_product_not_found_is_none() {
        let store = firestore(ScriptedTransport::default().reply(404, r#"{"error":{}}"#));
        assert_eq!(block_on(store.get_product_by_id("missing")).unwrap(), None);
    }

    #[test]
    fn test_get_product_encodes_id() {
        let body = r#"{ "name": "x/products/a b", "fields": { "name": { "stringValue": "Bra" } } }"#;
        let store = firestore(ScriptedTransport::default().reply(200, body));
        let product = block_on(store.get_product_by_id("a b")).unwrap().unwrap();
        assert_eq!(product.name, "Bra");
        assert!(store.client_requests()[0].url.ends_with("/products/a%20b"));
    }

    #[test]
    fn test_get_product_failure_is_an_error() {
        let store = firestore(ScriptedTransport::default().fail("connection reset"));
        let err = block_on(store.get_product_by_id("p1")).unwrap_err();
        assert!(matches!(err, StoreError::Fetch(FetchError::Transport(_))));
    }

    #[test]
    fn test_brands_http_failure() {
        let store = firestore(ScriptedTransport::default().reply(500, "{}"));
        let err = block_on(store.list_active_brands()).unwrap_err();
        assert!(matches!(err, StoreError::Fetch(FetchError::Http { status: 500, .. })));
    }

    const SNAPSHOT: &str = r#"{
        "banners": [
            { "id": "b1", "name": "On", "photoUrl": "1.jpg", "isActive": true },
            { "id": "b2", "name": "Off", "photoUrl": "2.jpg", "isActive": false }
        ],
        "brands": [
            { "id": "r2", "name": "Rider", "logoUrl": "r.png", "isActive": true },
            { "id": "g1", "name": "GT Man", "logoUrl": "g.png", "isActive": true },
            { "id": "x1", "name": "Hidden", "logoUrl": "x.png", "isActive": false }
        ],
        "products": [
            { "id": "p1", "name": "Singlet", "retailPrice": 30000, "status": "active", "createdAt": "2024-01-01T00:00:00Z" },
            { "id": "p2", "name": "Boxer Pro", "retailPrice": 100000, "status": "active", "createdAt": "2024-03-01T00:00:00Z" },
            { "id": "p3", "name": "Bra Comfort", "retailPrice": 90000, "status": "draft", "createdAt": "2024-05-01T00:00:00Z" }
        ]
    }"#;

    #[test]
    fn test_memory_store_mirrors_queries() {
        let store = MemoryStore::from_json_str(SNAPSHOT).unwrap();

        let banners = block_on(store.list_active_banners()).unwrap();
        assert_eq!(banners.len(), 1);

        let brands: Vec<String> = block_on(store.list_active_brands())
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(brands, vec!["GT Man", "Rider"]);

        let recent: Vec<String> = block_on(store.list_recent_active_products(1))
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(recent, vec!["Boxer Pro"]);

        let all: Vec<String> = block_on(store.list_all_products())
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(all, vec!["Boxer Pro", "Bra Comfort", "Singlet"]);

        assert!(block_on(store.get_product_by_id("p3")).unwrap().is_some());
        assert!(block_on(store.get_product_by_id("nope")).unwrap().is_none());
    }

    #[test]
    fn test_bad_snapshot() {
        assert!(matches!(
            MemoryStore::from_json_str("[]"),
            Err(StoreError::Snapshot(_))
        ));
    }

    impl FirestoreStore<ScriptedTransport> {
        fn client_requests(&self) -> Vec<crate::transport::TransportRequest> {
            self.client.transport().requests.borrow().clone()
        }
    }
}
