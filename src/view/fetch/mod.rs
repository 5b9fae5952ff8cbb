//! The read-view lifecycle shared by the schedule and announcements
//! pages: one fetch per mount, `Loading` into a terminal
//! `Success`/`Failure`, never back.

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::{FetchReducer, ReadView};
pub use state::FetchState;
