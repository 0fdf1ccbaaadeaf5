use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};
use std::time::Duration;

use crate::catalog::error::FetchError;
use crate::catalog::types::{Product, ProductId};
use crate::config::CatalogConfig;

/// Read-only access to catalog entries.
///
/// `Ok(None)` means the read succeeded but produced no usable record.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, FetchError>;
}

/// Catalog reached over HTTP at `{base_url}/products/{id}`.
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url).map_err(|_| FetchError::InvalidUrl {
            url: config.base_url.clone(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                url: config.base_url.clone(),
            });
        }

        let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(timeout)
            .build()
            .map_err(FetchError::transport)?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The identifier is pushed as one percent-encoded path segment.
    pub fn product_url(&self, id: &ProductId) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .push("products")
            .push(id.as_str());
        Ok(url)
    }

    fn transport_error(&self, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            FetchError::transport(source)
        }
    }
}

#[async_trait]
impl ProductSource for HttpCatalog {
    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, FetchError> {
        let url = self.product_url(id)?;
        tracing::debug!(%url, "fetching product");

        // Always revalidate with the origin; a cached copy is never acceptable.
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        parse_product(&body)
    }
}

/// Interpret a success body.
///
/// An empty body or a JSON `null` is "no record"; anything else must be a
/// complete product.
pub fn parse_product(body: &[u8]) -> Result<Option<Product>, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<Product>>(body).map_err(|source| FetchError::Parse { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::FetchErrorKind;

    fn catalog(base_url: &str) -> HttpCatalog {
        HttpCatalog::new(&CatalogConfig {
            base_url: base_url.to_string(),
            ..CatalogConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn product_url_appends_path() {
        let catalog = catalog("https://fakestoreapi.com");
        let url = catalog.product_url(&ProductId::from(5)).unwrap();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products/5");
    }

    #[test]
    fn product_url_keeps_base_path() {
        let catalog = catalog("http://localhost:8080/api/");
        let url = catalog.product_url(&ProductId::from(3)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/products/3");
    }

    #[test]
    fn product_url_encodes_identifier() {
        let catalog = catalog("https://fakestoreapi.com");
        let id = ProductId::parse("a/b c").unwrap();
        let url = catalog.product_url(&id).unwrap();
        assert_eq!(url.path(), "/products/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_url() {
        let result = HttpCatalog::new(&CatalogConfig {
            base_url: "mailto:shop@example.com".to_string(),
            ..CatalogConfig::default()
        });
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[test]
    fn empty_and_null_bodies_are_not_found() {
        assert!(parse_product(b"").unwrap().is_none());
        assert!(parse_product(b"  \n").unwrap().is_none());
        assert!(parse_product(b"null").unwrap().is_none());
    }

    #[test]
    fn malformed_bodies_are_parse_errors() {
        for body in [&b"<html>"[..], b"{}", br#"{"id": 1}"#, b"[1,2]"] {
            let err = parse_product(body).unwrap_err();
            assert_eq!(err.kind(), FetchErrorKind::Parse);
        }
    }
}
