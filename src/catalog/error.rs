//! Error types for catalog reads.
//!
//! Every variant is terminal for the fetch that produced it: the view turns
//! it into visible state and nothing is retried.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while fetching a product.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Response received with a non-success status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Success status but the body is not a product
    #[error("invalid product data: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Request never completed (connection refused, DNS, reset, ...).
    /// `message` spells out the whole cause chain.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Base URL cannot carry a `/products/{id}` path
    #[error("invalid catalog URL '{url}'")]
    InvalidUrl { url: String },

    /// The read stopped before producing an outcome (aborted or panicked)
    #[error("product read ended without a result")]
    Interrupted,
}

/// Coarse classification of a [`FetchError`], kept in view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Http,
    Parse,
    Transport,
}

impl FetchError {
    pub fn transport(source: reqwest::Error) -> Self {
        Self::Transport {
            message: cause_chain(&source),
            source,
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Http { .. } => FetchErrorKind::Http,
            FetchError::Parse { .. } => FetchErrorKind::Parse,
            FetchError::Transport { .. }
            | FetchError::Timeout { .. }
            | FetchError::InvalidUrl { .. }
            | FetchError::Interrupted => FetchErrorKind::Transport,
        }
    }

    /// Status code, for failures that got as far as a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// `outer: inner: root`, skipping causes already spelled out by the level
/// above.
fn cause_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}
