//! # Error Types
//!
//! Validation errors for hada-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hada-core errors (this file)                                          │
//! │  └── ValidationError  - Draft presence-check failures                  │
//! │                                                                         │
//! │  hada-client errors (separate crate)                                   │
//! │  └── ClientError      - Transport / decode failures                    │
//! │                                                                         │
//! │  Flow: ValidationError blocks before any network call;                 │
//! │        ClientError happens after one.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message

use thiserror::Error;

/// Draft validation errors.
///
/// Detected before any network call; no network resource is consumed
/// when one of these fires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required creation field is empty.
    ///
    /// Only presence is checked. "abc" is a perfectly valid price as far
    /// as the client is concerned; the server decides what it means.
    #[error("{field} is required")]
    Required { field: &'static str },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
