//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep classification and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — character categories, compare/validate report structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no I/O, no ordering logic.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs consumed by scripts.

pub mod models;
