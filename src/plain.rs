//! Non-interactive mode: fetch one product and report it as text.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::catalog::{ProductId, ProductSource};
use crate::nav::History;
use crate::ui::product::{ProductDetailView, ProductViewState};

/// Run the product view for `id` until its fetch settles.
///
/// Must be called from within a tokio runtime.
pub async fn fetch_once(id: ProductId, source: Arc<dyn ProductSource>) -> ProductViewState {
    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel();
    let mut view = ProductDetailView::new(
        History::starting_at(Some(id)),
        source,
        Handle::current(),
        settled_tx,
    );
    view.sync();

    while view.is_fetching() {
        match settled_rx.recv().await {
            Some(settled) => {
                view.on_settled(settled);
            }
            None => break,
        }
    }

    view.state().clone()
}

/// Process exit code for a settled state: 0 only for a loaded product.
pub fn exit_code(state: &ProductViewState) -> i32 {
    match state {
        ProductViewState::Loaded { .. } => 0,
        ProductViewState::Idle
        | ProductViewState::Loading { .. }
        | ProductViewState::Error { .. }
        | ProductViewState::NotFound { .. } => 1,
    }
}
