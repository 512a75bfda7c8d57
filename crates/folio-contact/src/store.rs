//! Persistence boundary for contact submissions.
//!
//! The hosted database is an external collaborator; this trait is the seam.
//! Deployments without a configured backend use [`SimulatedStore`], which
//! accepts every submission without persisting anything, so the form
//! keeps working in an unconfigured deployment.

use async_trait::async_trait;
use folio_core::Result;
use log::info;

use crate::submission::ContactSubmission;

/// Backend that persists validated contact submissions.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist one submission. Implementations must be all-or-nothing;
    /// a failure here means nothing was stored.
    async fn save(&self, submission: &ContactSubmission) -> Result<()>;
}

/// No-op store for deployments without a configured backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedStore;

#[async_trait]
impl ContactStore for SimulatedStore {
    async fn save(&self, submission: &ContactSubmission) -> Result<()> {
        info!(
            "contact store not configured, simulating save for '{}'",
            submission.email
        );
        Ok(())
    }
}
