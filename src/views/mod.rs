//! Per-view state models for the two merchant-facing screens.
//!
//! Each view owns its own state object; no state is shared across views or
//! across requests. Network failures collapse into terminal screen states
//! the user escapes only by navigating again.

pub mod registration;
pub mod verification;
