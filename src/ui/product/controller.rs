//! Effectful half of the product detail view.
//!
//! The controller watches the navigation's identifier, spawns one catalog
//! read per identifier it observes and feeds settlements back through the
//! reducer. Results come back over an unbounded channel so the host decides
//! when they are applied.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::catalog::{FetchError, Product, ProductId, ProductSource};
use crate::nav::Navigation;
use crate::ui::mvi::Reducer;

use super::intent::{FetchSettled, ProductIntent};
use super::reducer::ProductReducer;
use super::state::{FetchTicket, ProductViewState};

struct InFlight {
    ticket: FetchTicket,
    task: JoinHandle<()>,
}

/// Reports the outcome of one fetch task. A task dropped before it finishes
/// (aborted, or unwound by a panic) still settles, as `Interrupted`.
struct Settlement {
    ticket: Option<FetchTicket>,
    settled_tx: UnboundedSender<FetchSettled>,
}

impl Settlement {
    fn deliver(mut self, outcome: Result<Option<Product>, FetchError>) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: Result<Option<Product>, FetchError>) {
        if let Some(ticket) = self.ticket.take() {
            // A closed channel means the view is gone.
            let _ = self.settled_tx.send(FetchSettled { ticket, outcome });
        }
    }
}

impl Drop for Settlement {
    fn drop(&mut self) {
        self.send(Err(FetchError::Interrupted));
    }
}

pub struct ProductDetailView<N: Navigation> {
    navigation: N,
    source: Arc<dyn ProductSource>,
    runtime: Handle,
    settled_tx: UnboundedSender<FetchSettled>,
    state: ProductViewState,
    /// Identifier seen by the last `sync`.
    observed: Option<ProductId>,
    generation: u64,
    in_flight: Option<InFlight>,
}

impl<N: Navigation> ProductDetailView<N> {
    pub fn new(
        navigation: N,
        source: Arc<dyn ProductSource>,
        runtime: Handle,
        settled_tx: UnboundedSender<FetchSettled>,
    ) -> Self {
        Self {
            navigation,
            source,
            runtime,
            settled_tx,
            state: ProductViewState::default(),
            observed: None,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &ProductViewState {
        &self.state
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    /// Mutable access for the host. Call [`sync`](Self::sync) afterwards so
    /// identifier changes are picked up.
    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.navigation
    }

    /// True while a fetch is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of fetches issued so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pick up the navigation's current identifier.
    ///
    /// Returns `true` if the identifier changed. An unchanged identifier
    /// never triggers a second fetch.
    pub fn sync(&mut self) -> bool {
        let current = self.navigation.current_id();
        if current == self.observed {
            return false;
        }
        self.observed.clone_from(&current);

        match current {
            Some(id) => {
                tracing::info!(id = %id, "product selected");
                self.begin_fetch(id);
            }
            None => {
                tracing::info!("no product selected");
                self.cancel_in_flight();
                self.dispatch(ProductIntent::Clear);
            }
        }
        true
    }

    /// Fetch the current identifier again. Returns `false` when there is no
    /// identifier to fetch.
    pub fn reload(&mut self) -> bool {
        match self.observed.clone() {
            Some(id) => {
                tracing::info!(id = %id, "reloading product");
                self.begin_fetch(id);
                true
            }
            None => false,
        }
    }

    /// Ask the navigation to go back. Returns `false` when there was no
    /// earlier entry; the host decides what that means.
    pub fn go_back(&mut self) -> bool {
        if !self.navigation.back() {
            return false;
        }
        self.sync();
        true
    }

    /// Apply a settled fetch. Returns `false` if it was stale and dropped.
    pub fn on_settled(&mut self, settled: FetchSettled) -> bool {
        let ticket = &settled.ticket;
        let current = self.state.ticket() == Some(ticket);
        if !current {
            tracing::debug!(
                id = %ticket.id,
                generation = ticket.generation,
                "discarding stale product response"
            );
            return false;
        }

        match &settled.outcome {
            Ok(Some(_)) => tracing::debug!(id = %ticket.id, "product loaded"),
            Ok(None) => tracing::info!(id = %ticket.id, "product not found"),
            Err(err) => tracing::warn!(
                id = %ticket.id,
                status = ?err.status(),
                error = %err,
                "product fetch failed"
            ),
        }

        self.in_flight = None;
        self.dispatch(ProductIntent::Settled(settled));
        true
    }

    fn begin_fetch(&mut self, id: ProductId) {
        self.cancel_in_flight();
        self.generation += 1;
        let ticket = FetchTicket {
            id,
            generation: self.generation,
        };

        let source = Arc::clone(&self.source);
        let id = ticket.id.clone();
        let settlement = Settlement {
            ticket: Some(ticket.clone()),
            settled_tx: self.settled_tx.clone(),
        };
        let task = self.runtime.spawn(async move {
            let outcome = source.fetch_product(&id).await;
            settlement.deliver(outcome);
        });

        self.in_flight = Some(InFlight {
            ticket: ticket.clone(),
            task,
        });
        self.dispatch(ProductIntent::Begin { ticket });
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!(
                id = %in_flight.ticket.id,
                generation = in_flight.ticket.generation,
                "superseding in-flight product fetch"
            );
            in_flight.task.abort();
        }
    }

    fn dispatch(&mut self, intent: ProductIntent) {
        self.state = ProductReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl<N: Navigation> Drop for ProductDetailView<N> {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
