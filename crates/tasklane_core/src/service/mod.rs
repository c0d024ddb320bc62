//! Core use-case services.
//!
//! # Responsibility
//! - Expose repository operations under a stable use-case surface.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod task_service;
