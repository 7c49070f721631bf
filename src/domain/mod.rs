//! Pure domain models. No I/O, no CLI, no storage. Only data types and the
//! record line codec.

pub mod transaction;

pub use transaction::*;
