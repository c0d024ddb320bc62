//! Search entry points.
//!
//! # Responsibility
//! - Expose the client-side list filter used by the search field.
//! - Keep result shaping inside core.

pub mod filter;
