//! # Catalog
//!
//! Stock and product lookups the cart store awaits on.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Backends                                   │
//! │                                                                         │
//! │  ┌─────────────────────────┐      ┌─────────────────────────────┐      │
//! │  │      HttpCatalog        │      │      FixtureCatalog         │      │
//! │  │                         │      │                             │      │
//! │  │  GET {api}/stock/{id}   │      │  { "products": [...],       │      │
//! │  │  GET {api}/products/{id}│      │    "stock": [...] }         │      │
//! │  │  (reqwest, JSON)        │      │  (in memory, offline demo)  │      │
//! │  └─────────────────────────┘      └─────────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither backend caches: each call reflects the source at that moment.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shoecart_core::{Product, ProductId, Stock};
use tracing::debug;
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Remote source of stock ceilings and product records.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Current stock ceiling for a product.
    async fn stock(&self, product_id: ProductId) -> CatalogResult<Stock>;

    /// Full product record.
    async fn product(&self, product_id: ProductId) -> CatalogResult<Product>;
}

// =============================================================================
// HTTP Catalog
// =============================================================================

/// Catalog backed by the storefront's JSON API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse or the HTTP client fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        HttpCatalog::with_client(base_url, client)
    }

    /// Creates a catalog that sends requests through an existing client.
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> CatalogResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| CatalogError::Parse(format!("Invalid API URL '{}': {}", base_url, e)))?;

        Ok(HttpCatalog {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// URL for a resource path such as `stock/3`.
    fn endpoint(&self, resource: &str, product_id: ProductId) -> String {
        format!("{}/{}/{}", self.base_url, resource, product_id)
    }

    /// Executes a GET request and decodes the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        product_id: ProductId,
    ) -> CatalogResult<T> {
        let url = self.endpoint(path, product_id);
        debug!(%url, "catalog request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.as_u16() == 404 {
            return Err(CatalogError::not_found(resource, product_id));
        }

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("{} {}: {}", resource, product_id, e)))
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn stock(&self, product_id: ProductId) -> CatalogResult<Stock> {
        self.get("Stock", "stock", product_id).await
    }

    async fn product(&self, product_id: ProductId) -> CatalogResult<Product> {
        self.get("Product", "products", product_id).await
    }
}

// =============================================================================
// Fixture Catalog
// =============================================================================

/// Layout of the demo API's database file.
#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    stock: Vec<Stock>,
}

/// In-memory catalog, loaded from the same JSON file the demo API serves.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, Stock>,
}

impl FixtureCatalog {
    /// Creates a catalog from product and stock records.
    pub fn new(products: Vec<Product>, stock: Vec<Stock>) -> Self {
        FixtureCatalog {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
            stock: stock.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Parses a `{ "products": [...], "stock": [...] }` document.
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let file: FixtureFile =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(FixtureCatalog::new(file.products, file.stock))
    }

    /// Reads and parses a fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        FixtureCatalog::from_json(&raw)
    }

    /// Number of products in the fixture.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

#[async_trait]
impl Catalog for FixtureCatalog {
    async fn stock(&self, product_id: ProductId) -> CatalogResult<Stock> {
        self.stock
            .get(&product_id)
            .copied()
            .ok_or_else(|| CatalogError::not_found("Stock", product_id))
    }

    async fn product(&self, product_id: ProductId) -> CatalogResult<Product> {
        self.products
            .get(&product_id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Product", product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const FIXTURE: &str = r#"{
        "products": [
            {
                "id": 1,
                "title": "Tênis de Caminhada Leve Confortável",
                "price": 179.9,
                "image": "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg"
            },
            {
                "id": 2,
                "title": "Tênis VR Caminhada Confortável Detalhes Couro Masculino",
                "price": 139.9,
                "image": "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis2.jpg"
            }
        ],
        "stock": [
            { "id": 1, "amount": 3 },
            { "id": 2, "amount": 5 }
        ]
    }"#;

    #[tokio::test]
    async fn test_fixture_lookups() {
        let catalog = FixtureCatalog::from_json(FIXTURE).unwrap();

        assert_eq!(catalog.product_count(), 2);
        assert_eq!(catalog.stock(2).await.unwrap().amount, 5);
        assert_eq!(catalog.product(1).await.unwrap().price, 179.9);
    }

    #[tokio::test]
    async fn test_fixture_unknown_id() {
        let catalog = FixtureCatalog::from_json(FIXTURE).unwrap();

        let err = catalog.stock(42).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { id: 42, .. }));
        assert!(catalog.product(42).await.is_err());
    }

    #[tokio::test]
    async fn test_demo_database_parses() {
        let catalog = FixtureCatalog::from_json(include_str!("../../../demos/db.json")).unwrap();

        assert_eq!(catalog.product_count(), 6);
        assert_eq!(catalog.stock(4).await.unwrap().amount, 1);
        assert_eq!(catalog.product(3).await.unwrap().title, "Tênis Adidas Duramo Lite 2.0");
    }

    #[test]
    fn test_fixture_rejects_bad_json() {
        assert!(matches!(
            FixtureCatalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_http_endpoint() {
        let catalog = HttpCatalog::new("http://localhost:3333/", Duration::from_secs(1)).unwrap();

        assert_eq!(
            catalog.endpoint("stock", 3),
            "http://localhost:3333/stock/3"
        );
        assert_eq!(
            catalog.endpoint("products", 12),
            "http://localhost:3333/products/12"
        );
    }

    #[test]
    fn test_http_rejects_bad_url() {
        assert!(HttpCatalog::new("not a url", Duration::from_secs(1)).is_err());
    }

    // -------------------------------------------------------------------------
    // HTTP responses
    // -------------------------------------------------------------------------

    /// Answers one request with a canned response.
    ///
    /// Returns the catalog pointed at the listener and a handle yielding the
    /// request line the server received.
    async fn serve_once(status: &str, body: &str) -> (HttpCatalog, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let catalog = HttpCatalog::with_client(&format!("http://{}", addr), client).unwrap();
        (catalog, server)
    }

    #[tokio::test]
    async fn test_http_stock_decodes() {
        let (catalog, server) = serve_once("200 OK", r#"{"id":3,"amount":5}"#).await;

        let stock = catalog.stock(3).await.unwrap();

        assert_eq!(stock, Stock { id: 3, amount: 5 });
        assert!(server.await.unwrap().starts_with("GET /stock/3 "));
    }

    #[tokio::test]
    async fn test_http_product_decodes() {
        let body = r#"{"id":2,"title":"Tênis VR","price":139.9,"image":"https://cdn.example.com/2.jpg"}"#;
        let (catalog, server) = serve_once("200 OK", body).await;

        let product = catalog.product(2).await.unwrap();

        assert_eq!(product.id, 2);
        assert_eq!(product.title, "Tênis VR");
        assert_eq!(product.price, 139.9);
        assert!(server.await.unwrap().starts_with("GET /products/2 "));
    }

    #[tokio::test]
    async fn test_http_404_is_not_found() {
        let (catalog, _server) = serve_once("404 Not Found", "{}").await;

        let err = catalog.stock(3).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound {
                resource: "Stock",
                id: 3
            }
        ));
    }

    #[tokio::test]
    async fn test_http_server_error_is_status() {
        let (catalog, _server) = serve_once("500 Internal Server Error", "{}").await;

        match catalog.product(7).await.unwrap_err() {
            CatalogError::Status { status, url } => {
                assert_eq!(status, 500);
                assert!(url.ends_with("/products/7"));
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_bad_body_is_parse_error() {
        let (catalog, _server) = serve_once("200 OK", "definitely not json").await;

        let err = catalog.stock(1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
