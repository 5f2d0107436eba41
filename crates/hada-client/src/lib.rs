//! # hada-client: Catalog Sync Client
//!
//! Keeps a local snapshot of the ColorHada product catalog consistent with
//! the remote server by always re-fetching after any write.
//!
//! ## Sync Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Optimistic Refresh Cycle                             │
//! │                                                                         │
//! │   Local Snapshot                         Remote Server                  │
//! │   ──────────────                         ─────────────                  │
//! │                                                                         │
//! │   refresh() ───────── GET /api/productos ──────────►                   │
//! │        ◄──────────── full catalog (JSON) ───────────                   │
//! │   replace snapshot wholesale                                            │
//! │                                                                         │
//! │   record_sale(id) ──── POST /vender ───────────────►                   │
//! │        (result ignored)                                                 │
//! │   then refresh() unconditionally                                        │
//! │                                                                         │
//! │   create_product() ── POST /agregar ───────────────►                   │
//! │        success: close form, clear draft, refresh()                      │
//! │        failure: keep form open, draft intact                            │
//! │                                                                         │
//! │   INVARIANT: the snapshot is never authoritative. It is a               │
//! │   timestamp-less mirror of the server's last response, valid only       │
//! │   until the next mutation or refresh.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Base URL of the remote API (default + env override)
//! - [`api`] - Typed wrapper over the three HTTP endpoints
//! - [`session`] - The state holder with the sync operations
//! - [`error`] - Transport / decode error taxonomy

pub mod api;
pub mod config;
pub mod error;
pub mod session;

pub use api::StoreApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{CatalogSession, CreateOutcome};

// Re-export the domain types so presentation layers only need one dependency.
pub use hada_core::{Product, ProductDraft, ValidationError};
