//! Booking calendar: month grid generation and single-date selection.
//!
//! The calendar is modelled as an explicit state object driven by typed
//! events. Rendering is a pure function of that state, so the whole selection
//! flow can be exercised without a browser.

pub mod cursor;
pub mod format;
pub mod grid;
pub mod state;

pub use cursor::*;
pub use format::*;
pub use grid::*;
pub use state::*;
