//! State for the product detail view.

use crate::catalog::{FetchError, FetchErrorKind, Product, ProductId};
use crate::ui::mvi::UiState;

/// Identifies one fetch: which product, and which generation of request.
///
/// Generations only ever increase, so a settlement carrying an older ticket
/// belongs to a superseded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: ProductId,
    pub generation: u64,
}

/// A failed fetch as the view shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl From<&FetchError> for ViewError {
    fn from(err: &FetchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// What the product detail view is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductViewState {
    /// No identifier available, nothing requested.
    #[default]
    Idle,

    /// A fetch is outstanding.
    Loading {
        ticket: FetchTicket,
    },

    /// The fetch failed.
    Error {
        id: ProductId,
        error: ViewError,
    },

    /// The fetch succeeded but returned no record.
    NotFound {
        id: ProductId,
    },

    Loaded {
        id: ProductId,
        product: Product,
    },
}

impl UiState for ProductViewState {}

impl ProductViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Identifier the state belongs to, if any.
    pub fn id(&self) -> Option<&ProductId> {
        match self {
            Self::Idle => None,
            Self::Loading { ticket } => Some(&ticket.id),
            Self::Error { id, .. } | Self::NotFound { id } | Self::Loaded { id, .. } => Some(id),
        }
    }

    /// Ticket of the outstanding fetch, only while loading.
    pub fn ticket(&self) -> Option<&FetchTicket> {
        match self {
            Self::Loading { ticket } => Some(ticket),
            _ => None,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Loaded { product, .. } => Some(product),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            Self::Error { error, .. } => Some(error),
            _ => None,
        }
    }
}
