//! Shared state for API handlers.

use std::sync::Arc;

use folio_catalog::Catalog;
use folio_contact::ContactService;
use folio_core::{ConfigProvider, Result};

/// State shared by all request handlers.
///
/// Cloned per request; both members are cheap handles.
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<Catalog>,
    pub contact: ContactService,
}

impl ApiState {
    /// Create state over an existing catalog and contact service.
    pub fn new(catalog: Catalog, contact: ContactService) -> Self {
        Self {
            catalog: Arc::new(catalog),
            contact,
        }
    }

    /// Create state from configuration, with the simulated contact backend.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(
            Catalog::from_config(config)?,
            ContactService::simulated(),
        ))
    }
}
