//! # ColorHada Terminal Shell
//!
//! Thin presentation layer over the catalog session. All state and
//! sequencing lives in `hada-client`; this crate only renders the snapshot
//! and maps typed commands to session operations.
//!
//! ## Command Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shell Commands                                    │
//! │                                                                         │
//! │  User Input               Session Operation        Screen Change        │
//! │  ──────────               ─────────────────        ─────────────        │
//! │                                                                         │
//! │  l / lista  ────────────► refresh() ─────────────► re-render catalog   │
//! │                                                                         │
//! │  v <id> / vender <id> ──► record_sale(id) ───────► re-render catalog   │
//! │                            (then refresh)                               │
//! │                                                                         │
//! │  a / agregar ───────────► open_form()                                   │
//! │                           prompt fields into draft                      │
//! │                           create_product() ──────► acknowledgment      │
//! │                                                                         │
//! │  s / salir ─────────────► exit                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use hada_client::{CatalogSession, ClientConfig, CreateOutcome, StoreApi};

/// Runs the interactive shell until the user exits or stdin closes.
///
/// ## Startup Sequence
/// 1. Initialize tracing (logging)
/// 2. Resolve the API base URL (env override or production default)
/// 3. Cold-start refresh — the catalog is never persisted locally
/// 4. Enter the command loop
pub async fn run() {
    init_tracing();

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, "Starting ColorHada catalog client");

    let mut session = CatalogSession::new(StoreApi::new(config));

    println!("=== ColorHada Gestión ===");
    session.refresh().await;
    render_catalog(&session);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(line) = read_line(&stdin) else {
            break;
        };
        let line = line.trim();

        let mut parts = line.splitn(2, ' ');
        match (parts.next().unwrap_or(""), parts.next()) {
            ("", _) => {}
            ("l", _) | ("lista", _) => {
                session.refresh().await;
                render_catalog(&session);
            }
            ("v", Some(arg)) | ("vender", Some(arg)) => match arg.trim().parse::<i64>() {
                Ok(id) => {
                    // Existence and stock are the server's problem
                    session.record_sale(id).await;
                    render_catalog(&session);
                }
                Err(_) => println!("Id inválido: {arg}"),
            },
            ("a", _) | ("agregar", _) => {
                add_product_flow(&mut session, &stdin).await;
                render_catalog(&session);
            }
            ("s", _) | ("salir", _) | ("q", _) => break,
            _ => print_help(),
        }
    }

    info!("Shell closed");
}

/// Walks the user through the creation form.
///
/// The form stays open across failed attempts so the draft is retained for
/// retry; declining a retry cancels and discards the draft.
async fn add_product_flow(session: &mut CatalogSession, stdin: &io::Stdin) {
    session.open_form();

    loop {
        println!("--- Nuevo Producto ---");
        let draft = session.draft_mut();
        prompt_field(stdin, "Nombre", &mut draft.name);
        prompt_field(stdin, "Precio", &mut draft.price);
        prompt_field(stdin, "Stock Inicial", &mut draft.stock);
        prompt_field(stdin, "Categoría", &mut draft.category);

        match session.create_product().await {
            CreateOutcome::Saved => {
                println!("✅ Éxito: Producto agregado correctamente");
                return;
            }
            CreateOutcome::Invalid(_) => {
                println!("❌ Error: Completá los campos básicos");
            }
            CreateOutcome::Failed => {
                println!("❌ Error: No se pudo guardar");
            }
        }

        if !confirm(stdin, "¿Reintentar? (s/n)") {
            session.close_form();
            return;
        }
    }
}

/// Prompts for one form field, keeping the retained value on empty input.
fn prompt_field(stdin: &io::Stdin, label: &str, value: &mut String) {
    if value.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{value}]: ");
    }
    let _ = io::stdout().flush();

    if let Some(line) = read_line(stdin) {
        let line = line.trim();
        if !line.is_empty() {
            *value = line.to_string();
        }
    }
}

fn confirm(stdin: &io::Stdin, question: &str) -> bool {
    print!("{question} ");
    let _ = io::stdout().flush();
    matches!(
        read_line(stdin).as_deref().map(str::trim),
        Some("s") | Some("S") | Some("si") | Some("sí")
    )
}

/// Prints the snapshot the way the server returned it, with the low-stock
/// warnings the store owner relies on.
fn render_catalog(session: &CatalogSession) {
    let products = session.products();
    if products.is_empty() {
        println!("(sin productos)");
        return;
    }

    println!("{:>4}  {:<28} {:>10} {:>7}  {}", "ID", "Producto", "Precio", "Stock", "Categoría");
    for p in products {
        let marker = if p.is_low_stock() { " ⚠" } else { "" };
        println!(
            "{:>4}  {:<28} {:>10.2} {:>7}  {}{}",
            p.id,
            p.name,
            p.price,
            p.stock,
            p.category.as_deref().unwrap_or("-"),
            marker,
        );
    }

    for p in products.iter().filter(|p| p.is_low_stock()) {
        println!("⚠️  ¡Stock Bajo! Quedan solo {} unidades de: {}", p.stock, p.name);
    }
}

fn print_help() {
    println!("Comandos:");
    println!("  l | lista        actualizar y listar el catálogo");
    println!("  v | vender <id>  vender una unidad");
    println!("  a | agregar      cargar un producto nuevo");
    println!("  s | salir        salir");
}

/// Reads one line from stdin; `None` on EOF or read error.
fn read_line(stdin: &io::Stdin) -> Option<String> {
    let mut buf = String::new();
    match stdin.lock().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hada=trace` - Show trace for hada crates only
/// - Default: warnings only, so swallowed sync failures stay visible in the
///   log without cluttering the screen
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,hada=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
