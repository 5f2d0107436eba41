//! # Domain Types
//!
//! The two data shapes the client works with.
//!
//! ## Ownership Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Who Owns What                                   │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │      Product        │            │    ProductDraft     │            │
//! │  │  ─────────────────  │            │  ─────────────────  │            │
//! │  │  SERVER-OWNED       │            │  CLIENT-OWNED       │            │
//! │  │  read-only mirror   │            │  ephemeral form     │            │
//! │  │  of the last fetch  │            │  text, unvalidated  │            │
//! │  │                     │            │  numerics           │            │
//! │  │  id (server int)    │            │  name               │            │
//! │  │  name / price       │            │  price (raw text)   │            │
//! │  │  stock / category   │            │  stock (raw text)   │            │
//! │  │  min_stock          │            │  category           │            │
//! │  └─────────────────────┘            └─────────────────────┘            │
//! │                                                                         │
//! │  A Product exists only between two refreshes. A ProductDraft exists     │
//! │  only between form-open and submit-success or cancel.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Names
//! The remote API speaks Spanish (`nombre`, `precio`, ...). Serde renames
//! keep the Rust side idiomatic while matching the wire exactly.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product row as returned by `GET /api/productos`.
///
/// This is a read-only projection: the client never mutates a `Product`,
/// it only replaces the whole list on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the server, immutable once created.
    pub id: i64,

    /// Display name (non-empty on the server side).
    #[serde(rename = "nombre")]
    pub name: String,

    /// Unit price. The server stores a REAL; no money arithmetic happens
    /// client-side, so a plain f64 mirror is sufficient.
    #[serde(rename = "precio")]
    pub price: f64,

    /// Units currently on hand.
    pub stock: i64,

    /// Optional category label.
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,

    /// Low-stock threshold. Present in the server's rows but absent from
    /// older payload shapes, so it is tolerated as missing.
    #[serde(rename = "stock_minimo", default)]
    pub min_stock: Option<i64>,
}

impl Product {
    /// Whether this product is at or below its low-stock threshold.
    ///
    /// Products without a threshold are never considered low.
    pub fn is_low_stock(&self) -> bool {
        match self.min_stock {
            Some(min) => self.stock <= min,
            None => false,
        }
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// The in-progress product creation form.
///
/// ## Raw-Text Numerics
/// `price` and `stock` are kept exactly as entered. The client submits them
/// verbatim and lets the server coerce and reject; adding client-side
/// numeric parsing here would change observable behavior.
///
/// ## Lifecycle
/// ```text
/// form open ──► fields edited ──► submit-success ──► reset()
///                          │
///                          ├──► cancel ──► reset()
///                          │
///                          └──► submit-failure ──► retained for retry
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Product name. Required.
    pub name: String,

    /// Unit price as entered. Required, not parsed.
    pub price: String,

    /// Initial stock as entered. Required, not parsed.
    pub stock: String,

    /// Category label. Optional; submitted even when empty.
    pub category: String,
}

impl ProductDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        ProductDraft::default()
    }

    /// Clears all fields back to empty.
    pub fn reset(&mut self) {
        *self = ProductDraft::default();
    }

    /// Whether every field is empty (the post-reset state).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.price.is_empty()
            && self.stock.is_empty()
            && self.category.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
