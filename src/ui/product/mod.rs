//! Product detail view.
//!
//! Shows one catalog entry chosen by the host's navigation.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - View state enum and fetch tickets
//! - `intent.rs` - Fetch lifecycle events
//! - `reducer.rs` - State transitions, including the stale-response guard
//! - `controller.rs` - Spawns catalog reads and applies their settlements
//! - `view.rs` - Rendering

mod controller;
mod intent;
mod reducer;
mod state;
mod view;

pub use controller::ProductDetailView;
pub use intent::{FetchSettled, ProductIntent};
pub use reducer::ProductReducer;
pub use state::{FetchTicket, ProductViewState, ViewError};
pub use view::{
    detail_lines, plain_text, render_product_view, BACK_LABEL, IDLE_MESSAGE, LOADING_MESSAGE,
    NOT_FOUND_MESSAGE,
};
