use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry as returned by `GET /products/{id}`.
///
/// Every field is required; a body that lacks one is rejected as a parse
/// failure instead of being rendered partially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// URI of the product image.
    pub image: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Product {
    /// Price with the currency glyph, using the plain numeric conversion.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

impl Rating {
    pub fn display_rate(&self) -> String {
        format!("{} / 5", self.rate)
    }

    pub fn display_count(&self) -> String {
        format!("({} reviews)", self.count)
    }
}

/// Identifier taken from the navigation context.
///
/// Surrounding whitespace is dropped. An empty identifier is not a
/// `ProductId`: callers get `None` and must not fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the identifier is a plain integer.
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
