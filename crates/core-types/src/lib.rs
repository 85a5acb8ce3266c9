//! # Core Types
//!
//! The shared vocabulary of the workspace: the closed set of actions a range can
//! assign to a hand, the `RangeContract` payload itself, and helpers for the
//! 13x13 starting-hand grid.
//!
//! This crate has no knowledge of storage, HTTP, or validation rules. Every other
//! crate depends on it.

pub mod enums;
pub mod error;
pub mod hand;
pub mod range;

// Re-export the core types to provide a clean public API.
pub use enums::ActionType;
pub use error::CoreError;
pub use hand::{GridCell, HandLabel, RANKS, all_hands_13x13};
pub use range::{HandAction, RangeContract};
