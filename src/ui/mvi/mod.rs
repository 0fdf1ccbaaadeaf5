//! Model-View-Intent (MVI) architecture primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of what a screen shows
//! - **Intent**: User actions or settled background work
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Side effects (network reads, task spawning) live outside the reducer and
//! report back by dispatching intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
