//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and the observable state container
//! for unidirectional data flow between the registration core and whatever
//! presentation layer consumes it.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of observable state
//! - **Intent**: User actions or system events (network outcomes included)
//! - **Reducer**: Pure function that transforms state based on intents
//! - **StateStore**: Holds the current snapshot and notifies subscribers

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::StateStore;
