//! # Validation Module
//!
//! Draft validation for the product creation form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client (THIS MODULE)                                         │
//! │  └── Presence checks only: name, price, stock must be non-empty        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Remote Server                                                │
//! │  ├── Numeric coercion of price and stock                               │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Stock bookkeeping                                                 │
//! │                                                                         │
//! │  The client deliberately stops at Layer 1. Price and stock travel      │
//! │  as raw text; the server is the sole authority on what parses.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hada_core::{validate_draft, ProductDraft};
//!
//! let mut draft = ProductDraft::new();
//! assert!(validate_draft(&draft).is_err());
//!
//! draft.name = "Marcador Rosa".to_string();
//! draft.price = "500".to_string();
//! draft.stock = "10".to_string();
//! assert!(validate_draft(&draft).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductDraft;

/// Validates a creation draft for submission.
///
/// ## Rules
/// - `name`, `price`, and `stock` must be non-empty
/// - `category` is optional and never checked
/// - No trimming: whitespace counts as content, matching the original
///   form's emptiness semantics
///
/// Returns the first missing field, checked in form order.
pub fn validate_draft(draft: &ProductDraft) -> ValidationResult<()> {
    if draft.name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if draft.price.is_empty() {
        return Err(ValidationError::Required { field: "price" });
    }

    if draft.stock.is_empty() {
        return Err(ValidationError::Required { field: "stock" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
