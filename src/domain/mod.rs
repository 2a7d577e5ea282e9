//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `catalog` - The static legal-document table and its lookups
//! - `conversation` - Stage machine, intent classification and reply building
//! - `session` - Chat session aggregate

pub mod catalog;
pub mod conversation;
pub mod foundation;
pub mod session;
