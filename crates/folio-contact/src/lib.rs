//! Contact submission handling for Folio.
//!
//! Validates `{name, email, subject, message}` payloads and hands valid
//! ones to a [`ContactStore`] backend. Outcomes are always returned as data
//! ([`ContactOutcome`]), never as errors: validation failures carry
//! field-level messages, persistence failures carry a generic retryable
//! message, and nothing is ever partially persisted.
//!
//! # Modules
//!
//! - [`submission`]: payload type and field validation
//! - [`store`]: the persistence seam and the simulated backend

pub mod store;
pub mod submission;

use std::sync::Arc;

use log::error;
use serde::{Deserialize, Serialize};

pub use store::{ContactStore, SimulatedStore};
pub use submission::{ContactSubmission, FieldErrors};

/// Result of a contact submission attempt, as shown to the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl ContactOutcome {
    fn sent() -> Self {
        Self {
            success: true,
            message: Some(
                "Message sent successfully! I'll get back to you as soon as possible."
                    .to_string(),
            ),
            error: None,
            field_errors: None,
        }
    }

    fn invalid(field_errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: None,
            error: Some("Please fix the errors below and try again.".to_string()),
            field_errors: Some(field_errors),
        }
    }

    fn store_failed() -> Self {
        Self {
            success: false,
            message: None,
            error: Some("Failed to send message. Please try again later.".to_string()),
            field_errors: None,
        }
    }
}

/// Validates submissions and forwards valid ones to the configured store.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    /// Create a service over the given store.
    pub fn new(store: impl ContactStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a service over a shared store reference.
    pub fn with_shared(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Create a service with the simulated (unconfigured) backend.
    pub fn simulated() -> Self {
        Self::new(SimulatedStore)
    }

    /// Validate and submit. The store is only reached when every field
    /// validates. There is no automatic retry on persistence failure;
    /// the caller may resubmit.
    pub async fn submit(&self, submission: ContactSubmission) -> ContactOutcome {
        if let Err(field_errors) = submission.validate() {
            return ContactOutcome::invalid(field_errors);
        }

        match self.store.save(&submission).await {
            Ok(()) => ContactOutcome::sent(),
            Err(e) => {
                error!("contact store failure: {e}");
                ContactOutcome::store_failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::Error;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that records every save call.
    #[derive(Default)]
    struct RecordingStore {
        saved: Mutex<Vec<ContactSubmission>>,
    }

    #[async_trait]
    impl ContactStore for RecordingStore {
        async fn save(&self, submission: &ContactSubmission) -> folio_core::Result<()> {
            self.saved.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    /// Store that always fails, counting attempts.
    #[derive(Default)]
    struct FailingStore {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl ContactStore for FailingStore {
        async fn save(&self, _submission: &ContactSubmission) -> folio_core::Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(Error::invalid_data("backend unreachable"))
        }
    }

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "I would like to discuss a project.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_valid_persists_and_succeeds() {
        let store = Arc::new(RecordingStore::default());
        let service = ContactService::with_shared(store.clone());

        let outcome = service.submit(valid_submission()).await;
        assert!(outcome.success);
        assert!(outcome.message.is_some());
        assert_eq!(store.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_invalid_email_no_persistence() {
        // Invalid email: fieldErrors.email is set and the store is never called.
        let store = Arc::new(RecordingStore::default());
        let service = ContactService::with_shared(store.clone());

        let mut submission = valid_submission();
        submission.email = "not-an-email".to_string();

        let outcome = service.submit(submission).await;
        assert!(!outcome.success);
        let field_errors = outcome.field_errors.unwrap();
        assert!(field_errors.contains_key("email"));
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_store_failure_is_retryable_message() {
        let store = Arc::new(FailingStore::default());
        let service = ContactService::with_shared(store.clone());

        let outcome = service.submit(valid_submission()).await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Failed to send message. Please try again later.")
        );
        assert!(outcome.field_errors.is_none());
        // No automatic retry.
        assert_eq!(store.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_simulated_service_succeeds() {
        let outcome = ContactService::simulated().submit(valid_submission()).await;
        assert!(outcome.success);
    }

    #[test]
    fn test_outcome_json_shape() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "email".to_string(),
            vec!["Please enter a valid email address".to_string()],
        );
        let outcome = ContactOutcome::invalid(errors);
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["success"], false);
        assert!(json["fieldErrors"]["email"].is_array());
        assert!(json.get("message").is_none());
    }
}
