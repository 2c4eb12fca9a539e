//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate deck, tracker and repositories into screen-level APIs.
//! - Produce user-facing notices; keep UI/FFI layers free of rules.

pub mod activity_service;
pub mod match_service;
pub mod notice;
pub mod report_service;
pub mod saved_service;
