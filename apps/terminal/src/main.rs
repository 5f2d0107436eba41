//! # ColorHada Terminal Entry Point
//!
//! The actual shell lives in lib.rs for better testability; this binary
//! only stands up the runtime.

#[tokio::main]
async fn main() {
    hada_terminal::run().await;
}
