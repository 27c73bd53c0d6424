//! Data models for the Pulse topic lifecycle and voting workflow.
//!
//! Wire naming is camelCase to match the frontend contract.

mod notification;
mod research;
mod topic;
mod vote;

pub use notification::*;
pub use research::*;
pub use topic::*;
pub use vote::*;
