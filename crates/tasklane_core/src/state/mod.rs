//! Reactive view-state pipeline for the task list screen.
//!
//! # Responsibility
//! - Define UI intents and one-shot notification events.
//! - Keep the screen snapshot in sync with storage after every write.
//!
//! # Invariants
//! - Reads flow store -> snapshot -> subscribers; writes flow intent ->
//!   service -> store, then trigger a fresh read. One direction each way.

pub mod controller;
pub mod events;
