//! Service layer containing the comparison logic and output helpers.
//!
//! ## Service map
//! - `comparator.rs` — pair validation + accent/case-folded three-way ordering.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Comparator functions are pure; all failures surface as typed errors.
//! - Keep command handlers thin; delegate to services.

pub mod comparator;
pub mod output;
