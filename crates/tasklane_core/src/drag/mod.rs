//! Drag-to-reorder gesture interpretation.
//!
//! # Responsibility
//! - Convert continuous vertical pointer movement into discrete list-slot
//!   crossings with provisional slide feedback for neighboring items.
//!
//! # Invariants
//! - A slot crossing commits only after the half-item hysteresis band.
//! - Crossings never index past either end of the list.

pub mod tracker;
