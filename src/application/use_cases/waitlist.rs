use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    entities::{email::Email, waitlist_entry::WaitlistEntry},
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Inserts a new entry. Implementations must enforce case-insensitive
    /// uniqueness atomically and report a collision as
    /// `AppError::DuplicateEmail`.
    async fn insert(&self, email: &Email) -> AppResult<WaitlistEntry>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    store_timeout: Duration,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, store_timeout: Duration) -> Self {
        Self {
            repo,
            store_timeout,
        }
    }

    #[instrument(skip(self, email), fields(email = %email))]
    pub async fn join(&self, email: Email) -> AppResult<WaitlistEntry> {
        let entry = tokio::time::timeout(self.store_timeout, self.repo.insert(&email))
            .await
            .map_err(|_| {
                tracing::warn!(
                    timeout_ms = self.store_timeout.as_millis() as u64,
                    "store call timed out"
                );
                AppError::Database("store call timed out".into())
            })??;

        tracing::info!(entry_id = %entry.id, "Email added to waitlist");
        Ok(entry)
    }
}
