//! Persistent storage for rodo.
//!
//! Entries live in a plain-text store, one rendered line per entry.

mod store;

pub use store::Store;
