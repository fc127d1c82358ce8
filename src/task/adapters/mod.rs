//! Adapter implementations for task creation ports.
//!
//! - [`memory`]: thread-safe in-memory adapters for tests and embedding
//! - [`postgres`]: diesel-backed `PostgreSQL` adapters

pub mod memory;
pub mod postgres;
