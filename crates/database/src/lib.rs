//! # Range Storage
//!
//! Persistence for saved ranges. The rest of the application only sees the
//! `RangeStore` trait and decoded `RangeContract`s; how a range is laid out on
//! disk is the business of this crate.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. `DbRepository` talks to PostgreSQL through
//!   a `sqlx` connection pool; `InMemoryStore` offers the same behaviour without
//!   a database.
//! - **Opaque Payloads:** A range is stored as a text blob produced by an
//!   injected `PayloadCodec` (`JsonCodec` by default).
//!
//! ## Public API
//!
//! - `connect` / `run_migrations`: pool creation and schema setup.
//! - `RangeStore`, `RangeRecord`, `RangeSummary`: the storage contract.
//! - `DbRepository`, `InMemoryStore`: its two implementations.
//! - `PayloadCodec`, `JsonCodec`: blob encoding.
//! - `DbError`, `CodecError`: the errors this crate returns.

// Declare the modules that constitute this crate.
pub mod codec;
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use codec::{JsonCodec, PayloadCodec};
pub use connection::{connect, run_migrations};
pub use error::{CodecError, DbError};
pub use memory::InMemoryStore;
pub use repository::DbRepository;
pub use store::{RangeRecord, RangeStore, RangeSummary};
