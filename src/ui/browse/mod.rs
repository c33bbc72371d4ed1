//! Product browsing feature module.
//!
//! Tracks which tab is open and which card in the grid has the cursor.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Active tab and selected card index
//! - `intent.rs` - Navigation gestures (tab switches, grid moves)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::BrowseIntent;
pub use reducer::BrowseReducer;
pub use state::BrowseState;
