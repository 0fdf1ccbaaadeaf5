//! Reducer for the product detail view.

use crate::ui::mvi::Reducer;

use super::intent::{FetchSettled, ProductIntent};
use super::state::{ProductViewState, ViewError};

pub struct ProductReducer;

impl Reducer for ProductReducer {
    type State = ProductViewState;
    type Intent = ProductIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductIntent::Begin { ticket } => ProductViewState::Loading { ticket },

            ProductIntent::Clear => ProductViewState::Idle,

            ProductIntent::Settled(settled) => match state {
                ProductViewState::Loading { ticket } if ticket == settled.ticket => settle(settled),
                // Stale or duplicate settlement: keep whatever is current.
                other => other,
            },
        }
    }
}

fn settle(settled: FetchSettled) -> ProductViewState {
    let id = settled.ticket.id;
    match settled.outcome {
        Ok(Some(product)) => ProductViewState::Loaded { id, product },
        Ok(None) => ProductViewState::NotFound { id },
        Err(err) => ProductViewState::Error {
            id,
            error: ViewError::from(&err),
        },
    }
}
