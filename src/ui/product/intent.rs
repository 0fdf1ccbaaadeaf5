//! Intents for the product detail view.

use crate::catalog::{FetchError, Product};
use crate::ui::mvi::Intent;

use super::state::FetchTicket;

/// A fetch that has completed, successfully or not.
#[derive(Debug)]
pub struct FetchSettled {
    pub ticket: FetchTicket,
    pub outcome: Result<Option<Product>, FetchError>,
}

#[derive(Debug)]
pub enum ProductIntent {
    /// A fetch was issued for a new or re-triggered identifier.
    Begin { ticket: FetchTicket },

    /// A fetch completed.
    Settled(FetchSettled),

    /// The identifier went away.
    Clear,
}

impl Intent for ProductIntent {}
