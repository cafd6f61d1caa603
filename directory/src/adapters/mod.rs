//! Store adapters that live inside the directory crate.
//!
//! Only the in-memory store exists; it backs tests, the demo CLI and any
//! caller that wants a scratch directory for the lifetime of one value.

pub mod memory_repo;
