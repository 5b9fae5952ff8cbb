//! Model-View-Intent (MVI) primitives for the page state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Render
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a page needs to render
//! - **Intent**: user actions and network resolutions
//! - **Reducer**: pure function from (state, intent) to the next state
//!
//! Side effects (the actual HTTP calls) live in [`crate::view::runtime`],
//! which translates their results back into intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
