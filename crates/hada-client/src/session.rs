//! # Catalog Session
//!
//! The state holder behind the single catalog screen.
//!
//! ## State & Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Session State                               │
//! │                                                                         │
//! │  catalog:  Vec<Product>   full snapshot, replaced wholesale            │
//! │  loading:  bool           refresh in flight                            │
//! │  form:     Closed | Open  creation-form state machine                  │
//! │  draft:    ProductDraft   ephemeral form fields                        │
//! │                                                                         │
//! │  Creation Form State Machine                                           │
//! │  ───────────────────────────                                           │
//! │                                                                         │
//! │    Closed ──── open_form() ────► Open                                  │
//! │                                                                         │
//! │    Open ────── close_form() ───► Closed   (draft discarded)            │
//! │    Open ────── submit success ─► Closed   (draft discarded)            │
//! │    Open ────── submit failure ─► Open     (draft retained for retry)   │
//! │                                                                         │
//! │  SEQUENCING: record_sale and create_product each trigger exactly       │
//! │  one refresh() after their own request settles, success or failure.    │
//! │  There is no optimistic local mutation of the snapshot.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why `&mut self` Instead of a Mutex?
//! The session lives on one UI task and has no concurrent writer, so
//! exclusive borrows express the single-writer invariant directly. If two
//! refreshes ever overlap through separate sessions, last-write-wins is
//! acceptable: every response is a full authoritative snapshot.

use tracing::{info, warn};

use hada_core::{validate_draft, Product, ProductDraft, ValidationError};

use crate::api::StoreApi;

// =============================================================================
// Create Outcome
// =============================================================================

/// Result of a [`CatalogSession::create_product`] attempt, for the
/// presentation layer to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Product submitted; form closed, draft cleared, catalog refreshed.
    Saved,

    /// A required field was empty. No network call was made and the draft
    /// is untouched.
    Invalid(ValidationError),

    /// The submission never reached the server. The form stays open and
    /// the draft is retained for retry.
    Failed,
}

// =============================================================================
// Catalog Session
// =============================================================================

/// Local state for the catalog screen, synced against the remote server.
///
/// ## Invariants
/// - The snapshot is replaced wholesale on every successful refresh, in
///   server order; there is no merging with prior state.
/// - A failed refresh leaves the previous snapshot untouched.
/// - Every mutation is followed by exactly one refresh.
#[derive(Debug)]
pub struct CatalogSession {
    api: StoreApi,
    catalog: Vec<Product>,
    loading: bool,
    form_open: bool,
    draft: ProductDraft,
}

impl CatalogSession {
    /// Creates a session with an empty snapshot.
    ///
    /// Nothing is persisted across sessions; callers refresh on cold start.
    pub fn new(api: StoreApi) -> Self {
        CatalogSession {
            api,
            catalog: Vec::new(),
            loading: false,
            form_open: false,
            draft: ProductDraft::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The current snapshot, in the order the server returned it.
    pub fn products(&self) -> &[Product] {
        &self.catalog
    }

    /// Whether a refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the creation form is open.
    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// The creation draft.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Mutable access to the creation draft for field edits.
    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    // -------------------------------------------------------------------------
    // Sync Operations
    // -------------------------------------------------------------------------

    /// Re-fetches the catalog and replaces the snapshot wholesale.
    ///
    /// On transport or decode failure the previous snapshot stays in place
    /// and the failure is logged, not surfaced: the screen keeps showing
    /// stale data and remains usable. No retry.
    pub async fn refresh(&mut self) {
        self.loading = true;

        match self.api.fetch_catalog().await {
            Ok(products) => {
                info!(count = products.len(), "catalog snapshot replaced");
                self.catalog = products;
            }
            Err(err) => {
                warn!(error = %err, "catalog refresh failed; keeping previous snapshot");
            }
        }

        self.loading = false;
    }

    /// Records a one-unit sale, then refreshes.
    ///
    /// The sale request's outcome is not branched on: success and failure
    /// both lead to the same unconditional refresh, and failures (including
    /// server-side stock rejections) produce no user feedback. The snapshot
    /// is never decremented locally; stock stays stale until the refresh
    /// lands.
    pub async fn record_sale(&mut self, product_id: i64) {
        if let Err(err) = self.api.sell(product_id).await {
            warn!(product_id, error = %err, "sale request failed");
        }

        self.refresh().await;
    }

    /// Submits the current draft as a new product.
    ///
    /// Presence-validates the draft first; an incomplete draft aborts
    /// before any network call. On success the form closes, the draft
    /// resets, and the catalog refreshes. On transport failure the form
    /// stays open with the draft intact.
    pub async fn create_product(&mut self) -> CreateOutcome {
        if let Err(err) = validate_draft(&self.draft) {
            return CreateOutcome::Invalid(err);
        }

        match self.api.create(&self.draft).await {
            Ok(()) => {
                self.form_open = false;
                self.draft.reset();
                self.refresh().await;
                CreateOutcome::Saved
            }
            Err(err) => {
                warn!(error = %err, "product creation failed; draft retained");
                CreateOutcome::Failed
            }
        }
    }

    // -------------------------------------------------------------------------
    // Form State Machine
    // -------------------------------------------------------------------------

    /// Opens the creation form.
    ///
    /// The draft is left as-is so a retry after a failed submission keeps
    /// the user's input.
    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Closes the creation form, discarding the draft.
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.draft.reset();
    }
}

// =============================================================================
// Tests (against an in-process stub server)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::extract::{Form, State};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};

    use crate::config::ClientConfig;

    /// Shared state of the stub inventory server.
    #[derive(Default)]
    struct StubStore {
        products: Mutex<Vec<Product>>,
        fetches: AtomicUsize,
        sales: Mutex<Vec<HashMap<String, String>>>,
        creations: Mutex<Vec<HashMap<String, String>>>,
        fail_fetch: AtomicBool,
        reject_sales: AtomicBool,
    }

    impl StubStore {
        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }

        fn set_products(&self, products: Vec<Product>) {
            *self.products.lock().unwrap() = products;
        }
    }

    async fn list_products(State(stub): State<Arc<StubStore>>) -> Response {
        stub.fetches.fetch_add(1, Ordering::SeqCst);

        if stub.fail_fetch.load(Ordering::SeqCst) {
            // An HTML error page: decoding it as a product array fails
            return (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>").into_response();
        }

        Json(stub.products.lock().unwrap().clone()).into_response()
    }

    async fn sell(
        State(stub): State<Arc<StubStore>>,
        Form(fields): Form<HashMap<String, String>>,
    ) -> StatusCode {
        stub.sales.lock().unwrap().push(fields);

        if stub.reject_sales.load(Ordering::SeqCst) {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        }
    }

    async fn create(
        State(stub): State<Arc<StubStore>>,
        Form(fields): Form<HashMap<String, String>>,
    ) -> StatusCode {
        stub.creations.lock().unwrap().push(fields);
        StatusCode::OK
    }

    /// Spawns the stub server on an ephemeral port and returns a session
    /// pointed at it.
    async fn spawn_stub(products: Vec<Product>) -> (Arc<StubStore>, CatalogSession) {
        let stub = Arc::new(StubStore::default());
        stub.set_products(products);

        let app = Router::new()
            .route("/api/productos", get(list_products))
            .route("/vender", post(sell))
            .route("/agregar", post(create))
            .with_state(Arc::clone(&stub));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let session = CatalogSession::new(StoreApi::new(ClientConfig::new(format!(
            "http://{addr}"
        ))));
        (stub, session)
    }

    /// A session pointed at a port nothing listens on, for transport
    /// failures.
    async fn unreachable_session() -> CatalogSession {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        drop(listener);

        CatalogSession::new(StoreApi::new(ClientConfig::new(format!("http://{addr}"))))
    }

    fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            stock,
            category: None,
            min_stock: Some(2),
        }
    }

    fn fill_draft(session: &mut CatalogSession, name: &str, price: &str, stock: &str) {
        let draft = session.draft_mut();
        draft.name = name.to_string();
        draft.price = price.to_string();
        draft.stock = stock.to_string();
    }

    // -------------------------------------------------------------------------
    // Refresh
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn refresh_replaces_snapshot_wholesale_in_server_order() {
        let first = vec![product(2, "Lapicera", 300.0, 4), product(1, "Goma", 100.0, 9)];
        let (stub, mut session) = spawn_stub(first.clone()).await;

        session.refresh().await;
        assert_eq!(session.products(), &first[..]);
        assert!(!session.is_loading());

        // A completely different list replaces everything, no merging
        let second = vec![product(5, "Cuaderno", 1200.0, 7)];
        stub.set_products(second.clone());

        session.refresh().await;
        assert_eq!(session.products(), &second[..]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let initial = vec![product(1, "Marcador Rosa", 500.0, 10)];
        let (stub, mut session) = spawn_stub(initial.clone()).await;

        session.refresh().await;
        assert_eq!(session.products(), &initial[..]);

        stub.fail_fetch.store(true, Ordering::SeqCst);
        session.refresh().await;

        assert_eq!(session.products(), &initial[..]);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn refresh_against_unreachable_server_stays_usable() {
        let mut session = unreachable_session().await;

        session.refresh().await;

        assert!(session.products().is_empty());
        assert!(!session.is_loading());
    }

    // -------------------------------------------------------------------------
    // Record Sale
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn record_sale_sends_unit_quantity_then_refetches() {
        let (stub, mut session) = spawn_stub(vec![product(1, "Marcador Rosa", 500.0, 10)]).await;
        session.refresh().await;
        let fetches_before = stub.fetch_count();

        // The server, not the client, decides the post-sale stock. Make it
        // return something a local decrement would never produce.
        stub.set_products(vec![product(1, "Marcador Rosa", 500.0, 7)]);

        session.record_sale(1).await;

        let sales = stub.sales.lock().unwrap().clone();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].get("id").map(String::as_str), Some("1"));
        assert_eq!(sales[0].get("cantidad").map(String::as_str), Some("1"));

        // Exactly one follow-up refresh, and the displayed stock is the
        // server's answer (7), not a local decrement to 9
        assert_eq!(stub.fetch_count(), fetches_before + 1);
        assert_eq!(session.products()[0].stock, 7);
    }

    #[tokio::test]
    async fn record_sale_refreshes_even_when_sale_is_rejected() {
        let (stub, mut session) = spawn_stub(vec![product(1, "Marcador Rosa", 500.0, 10)]).await;
        stub.reject_sales.store(true, Ordering::SeqCst);
        let fetches_before = stub.fetch_count();

        session.record_sale(1).await;

        // The call site does not branch on the sale's outcome
        assert_eq!(stub.sales.lock().unwrap().len(), 1);
        assert_eq!(stub.fetch_count(), fetches_before + 1);
    }

    // -------------------------------------------------------------------------
    // Create Product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn incomplete_draft_never_reaches_the_network() {
        let (stub, mut session) = spawn_stub(Vec::new()).await;

        session.open_form();
        fill_draft(&mut session, "", "500", "10");
        let draft_before = session.draft().clone();

        let outcome = session.create_product().await;

        assert_eq!(
            outcome,
            CreateOutcome::Invalid(ValidationError::Required { field: "name" })
        );
        assert!(stub.creations.lock().unwrap().is_empty());
        assert_eq!(stub.fetch_count(), 0);
        assert_eq!(session.draft(), &draft_before);
        assert!(session.is_form_open());
    }

    #[tokio::test]
    async fn create_submits_once_with_fixed_min_stock_then_refetches() {
        let (stub, mut session) = spawn_stub(Vec::new()).await;

        session.open_form();
        fill_draft(&mut session, "Marcador Rosa", "500", "10");
        session.draft_mut().category = "Marcadores".to_string();

        let outcome = session.create_product().await;
        assert_eq!(outcome, CreateOutcome::Saved);

        let creations = stub.creations.lock().unwrap().clone();
        assert_eq!(creations.len(), 1);
        let form = &creations[0];
        assert_eq!(form.get("nombre").map(String::as_str), Some("Marcador Rosa"));
        assert_eq!(form.get("precio").map(String::as_str), Some("500"));
        assert_eq!(form.get("stock").map(String::as_str), Some("10"));
        assert_eq!(form.get("categoria").map(String::as_str), Some("Marcadores"));
        assert_eq!(form.get("stock_minimo").map(String::as_str), Some("2"));

        // Success closes the form, clears the draft, and refreshes
        assert!(!session.is_form_open());
        assert!(session.draft().is_empty());
        assert_eq!(stub.fetch_count(), 1);
    }

    #[tokio::test]
    async fn create_passes_numerics_through_as_raw_text() {
        let (stub, mut session) = spawn_stub(Vec::new()).await;

        session.open_form();
        fill_draft(&mut session, "Misterioso", "abc", "lots");

        let outcome = session.create_product().await;
        assert_eq!(outcome, CreateOutcome::Saved);

        let creations = stub.creations.lock().unwrap().clone();
        assert_eq!(creations[0].get("precio").map(String::as_str), Some("abc"));
        assert_eq!(creations[0].get("stock").map(String::as_str), Some("lots"));
    }

    #[tokio::test]
    async fn failed_create_keeps_form_open_and_draft_intact() {
        let mut session = unreachable_session().await;

        session.open_form();
        fill_draft(&mut session, "Marcador Rosa", "500", "10");
        let draft_before = session.draft().clone();

        let outcome = session.create_product().await;

        assert_eq!(outcome, CreateOutcome::Failed);
        assert!(session.is_form_open());
        assert_eq!(session.draft(), &draft_before);
    }

    // -------------------------------------------------------------------------
    // Form State Machine
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn close_form_discards_the_draft() {
        let mut session = unreachable_session().await;

        session.open_form();
        fill_draft(&mut session, "Cuaderno", "1200", "5");
        assert!(session.is_form_open());

        session.close_form();

        assert!(!session.is_form_open());
        assert!(session.draft().is_empty());
    }

    #[tokio::test]
    async fn reopening_after_failure_retains_the_draft() {
        let mut session = unreachable_session().await;

        session.open_form();
        fill_draft(&mut session, "Cuaderno", "1200", "5");
        assert_eq!(session.create_product().await, CreateOutcome::Failed);

        // Still open; opening again is a no-op that keeps the user's input
        session.open_form();
        assert_eq!(session.draft().name, "Cuaderno");
    }
}
