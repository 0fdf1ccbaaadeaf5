//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use async_trait::async_trait;
use product_view::catalog::{FetchError, HttpCatalog, Product, ProductId, ProductSource, Rating};
use product_view::config::CatalogConfig;
use std::collections::HashMap;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;
use tokio::sync::oneshot;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn http_catalog(base_url: &str, timeout_seconds: u32) -> HttpCatalog {
    HttpCatalog::new(&CatalogConfig {
        base_url: base_url.to_string(),
        timeout_seconds,
        connect_timeout_seconds: 1,
    })
    .expect("Failed to build catalog client")
}

pub fn sample_product(id: u64) -> Product {
    Product {
        id,
        title: format!("Sample product {id}"),
        description: "A product used in tests".to_string(),
        price: 12.5,
        category: "electronics".to_string(),
        image: format!("https://example.com/img/{id}.png"),
        rating: Rating {
            rate: 4.2,
            count: 31,
        },
    }
}

pub fn product_json(product: &Product) -> String {
    serde_json::to_string(product).unwrap()
}

pub fn id(raw: &str) -> ProductId {
    ProductId::parse(raw).unwrap()
}

// -- In-process sources -------------------------------------------------------

/// Answers from a fixed table and counts reads per identifier.
#[derive(Default)]
pub struct CountingSource {
    products: HashMap<String, Product>,
    calls: Mutex<Vec<String>>,
    total: AtomicUsize,
}

impl CountingSource {
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|p| (p.id.to_string(), p))
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductSource for CountingSource {
    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, FetchError> {
        self.total.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(id.as_str().to_string());
        Ok(self.products.get(id.as_str()).cloned())
    }
}

/// Holds each read open until the test releases it.
#[derive(Default)]
pub struct GatedSource {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<Option<Product>, FetchError>>>>,
}

impl GatedSource {
    /// Register identifier `raw`; the returned sender settles its read.
    pub fn gate(&self, raw: &str) -> oneshot::Sender<Result<Option<Product>, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(raw.to_string(), rx);
        tx
    }
}

#[async_trait]
impl ProductSource for GatedSource {
    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, FetchError> {
        let gate = self.gates.lock().unwrap().remove(id.as_str());
        match gate {
            Some(rx) => rx.await.unwrap_or(Ok(None)),
            None => Ok(None),
        }
    }
}

/// Blows up inside the read, as a buggy source would.
pub struct PanickingSource;

#[async_trait]
impl ProductSource for PanickingSource {
    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, FetchError> {
        if !id.as_str().is_empty() {
            panic!("catalog read for {id} failed");
        }
        Ok(None)
    }
}
