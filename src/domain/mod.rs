//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, the
//!   state machine trait)
//! - `interview` - The interview dialog: stages, script, screening,
//!   session state, and the controller

pub mod foundation;
pub mod interview;
