//! Domain rules for the courtside booking service.
//!
//! No I/O lives here: the `db` and `api` crates call into these functions
//! to validate input and to reason about slots before touching the store.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod types;
