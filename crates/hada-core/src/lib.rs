//! # hada-core: Pure Domain Logic for the ColorHada Catalog Client
//!
//! This crate holds the client's domain model with zero I/O dependencies.
//! Everything stateful about the remote catalog (fetching, selling, creating)
//! lives in `hada-client`; this crate only defines what a product and a
//! creation draft *are* and which drafts are submittable.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   ColorHada Client Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   apps/terminal (shell)                         │   │
//! │  │     catalog listing ──► sell command ──► creation form          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              hada-client (Catalog Sync Client)                  │   │
//! │  │     refresh, record_sale, create_product, form state            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hada-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐     ┌───────────┐     ┌───────────┐            │   │
//! │  │   │   types   │     │ validation│     │   error   │            │   │
//! │  │   │  Product  │     │  presence │     │ Validation│            │   │
//! │  │   │   Draft   │     │  checks   │     │   Error   │            │   │
//! │  │   └───────────┘     └───────────┘     └───────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Read-only projection**: the client never owns product data. `Product`
//!    mirrors whatever the server last returned, nothing more.
//! 2. **Raw-text drafts**: price and stock stay as entered text. The server
//!    is the sole authority on numeric coercion, so this crate deliberately
//!    performs presence checks only.
//! 3. **Explicit errors**: validation failures are typed, never strings or
//!    panics.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::{Product, ProductDraft};
pub use validation::validate_draft;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum-stock threshold submitted with every product creation.
///
/// ## Why a constant?
/// The creation form has no threshold field; the server expects one anyway.
/// Every new product ships with this fixed value until someone edits it
/// through the server's own admin UI.
pub const DEFAULT_MIN_STOCK: i64 = 2;

/// Quantity decremented by a single sale.
///
/// The client only records one-unit sales; there is no quantity picker.
pub const SALE_QUANTITY: i64 = 1;
