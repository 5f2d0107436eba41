//! # Remote API Wrapper
//!
//! Typed access to the three endpoints the client consumes.
//!
//! ## Wire Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory API Surface                              │
//! │                                                                         │
//! │  GET  /api/productos                                                   │
//! │       ◄── JSON array of products (Spanish field names)                 │
//! │                                                                         │
//! │  POST /vender          form-urlencoded                                 │
//! │       id=<product id>  cantidad=1                                      │
//! │       response ignored                                                 │
//! │                                                                         │
//! │  POST /agregar         form-urlencoded                                 │
//! │       nombre, precio, stock, categoria, stock_minimo=2                 │
//! │       response ignored                                                 │
//! │                                                                         │
//! │  Price and stock travel as the raw text the user typed. The server     │
//! │  is the sole authority on numeric coercion.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Codes
//! Mutation responses are not inspected at all: only transport failures
//! surface as errors. The catalog read additionally fails when the body is
//! not a product array. This mirrors the behavior the server's existing
//! clients rely on; do not add `error_for_status` here.

use serde::Serialize;
use tracing::debug;

use hada_core::{Product, ProductDraft, DEFAULT_MIN_STOCK, SALE_QUANTITY};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// Endpoint paths, relative to the configured base URL.
const CATALOG_PATH: &str = "/api/productos";
const SELL_PATH: &str = "/vender";
const CREATE_PATH: &str = "/agregar";

// =============================================================================
// Form Bodies
// =============================================================================

/// Body of `POST /vender`.
#[derive(Debug, Serialize)]
struct SellForm {
    id: String,
    cantidad: String,
}

/// Body of `POST /agregar`.
///
/// Field names match the server's form parameters exactly; `categoria` is
/// submitted even when empty.
#[derive(Debug, Serialize)]
struct CreateForm<'a> {
    nombre: &'a str,
    precio: &'a str,
    stock: &'a str,
    categoria: &'a str,
    stock_minimo: String,
}

// =============================================================================
// Store API
// =============================================================================

/// HTTP wrapper over the remote inventory API.
#[derive(Debug, Clone)]
pub struct StoreApi {
    http: reqwest::Client,
    base_url: String,
}

impl StoreApi {
    /// Creates an API wrapper for the configured server.
    ///
    /// The underlying client keeps reqwest's defaults: no request timeout,
    /// no retries.
    pub fn new(config: ClientConfig) -> Self {
        StoreApi {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the full product catalog.
    ///
    /// Returns the products in server order; callers replace their snapshot
    /// wholesale with this list.
    pub async fn fetch_catalog(&self) -> ClientResult<Vec<Product>> {
        debug!(endpoint = CATALOG_PATH, "fetching catalog");

        let response = self
            .http
            .get(self.url(CATALOG_PATH))
            .send()
            .await
            .map_err(|source| ClientError::Network {
                endpoint: CATALOG_PATH,
                source,
            })?;

        let products = response
            .json::<Vec<Product>>()
            .await
            .map_err(|source| ClientError::Decode {
                endpoint: CATALOG_PATH,
                source,
            })?;

        debug!(count = products.len(), "catalog fetched");
        Ok(products)
    }

    /// Records a one-unit sale of the given product.
    ///
    /// No local existence or stock check: the server owns both. The
    /// response status and body are ignored.
    pub async fn sell(&self, product_id: i64) -> ClientResult<()> {
        debug!(product_id, "recording sale");

        let form = SellForm {
            id: product_id.to_string(),
            cantidad: SALE_QUANTITY.to_string(),
        };

        self.http
            .post(self.url(SELL_PATH))
            .form(&form)
            .send()
            .await
            .map_err(|source| ClientError::Network {
                endpoint: SELL_PATH,
                source,
            })?;

        Ok(())
    }

    /// Submits a new product from a draft.
    ///
    /// The draft must already have passed [`hada_core::validate_draft`];
    /// this function submits the fields verbatim plus the fixed
    /// minimum-stock threshold. The response status and body are ignored.
    pub async fn create(&self, draft: &ProductDraft) -> ClientResult<()> {
        debug!(name = %draft.name, "creating product");

        let form = CreateForm {
            nombre: &draft.name,
            precio: &draft.price,
            stock: &draft.stock,
            categoria: &draft.category,
            stock_minimo: DEFAULT_MIN_STOCK.to_string(),
        };

        self.http
            .post(self.url(CREATE_PATH))
            .form(&form)
            .send()
            .await
            .map_err(|source| ClientError::Network {
                endpoint: CREATE_PATH,
                source,
            })?;

        Ok(())
    }
}
