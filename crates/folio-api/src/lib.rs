//! HTTP API server for the Folio content catalog.
//!
//! Thin axum layer over [`folio_catalog::Catalog`] and
//! [`folio_contact::ContactService`]. The handlers only translate between
//! HTTP and the catalog's types; all content semantics live below this
//! crate.
//!
//! # Modules
//!
//! - [`state`]: shared handler state
//! - [`routes`]: route table and handlers

pub mod routes;
pub mod state;

use std::net::SocketAddr;

use folio_core::Result;
use tracing::info;

pub use routes::router;
pub use state::ApiState;

/// Bind and serve the API until the task is cancelled.
pub async fn serve(addr: SocketAddr, state: ApiState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(folio_core::Error::from)?;
    info!("folio api listening on {addr}");
    axum::serve(listener, router(state))
        .await
        .map_err(folio_core::Error::from)?;
    Ok(())
}
