//! Document module - Mutable editing state.
//!
//! Holds the user's field values and table rows. Tables are immutable
//! values; the store swaps whole tables on every edit.

mod store;
mod table;

pub use store::{DocumentStateStore, StoreError};
pub use table::{Table, TableError, TableRow};
