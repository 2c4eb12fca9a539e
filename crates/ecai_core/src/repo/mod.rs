//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage choice out of service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`).
//! - Only in-memory storage ships; nothing is persisted across runs.

pub mod activity_repo;
