//! In-memory and failure-injecting implementations of `WaitlistRepo`.

use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    entities::{email::Email, waitlist_entry::WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory repo with the same case-insensitive unique constraint as the
/// Postgres index (ASCII case folding). The check and the insert happen under
/// one lock.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, email: &Email) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();
        let key = email.normalized();
        if entries.iter().any(|e| e.email.to_ascii_lowercase() == key) {
            return Err(AppError::DuplicateEmail);
        }

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            email: email.as_str().to_string(),
            created_at: Utc::now(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }
}

// ============================================================================
// Failure injection
// ============================================================================

/// Behaves like an unreachable database.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _email: &Email) -> AppResult<WaitlistEntry> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

/// Never answers within any reasonable store timeout.
pub struct SlowWaitlistRepo {
    delay: Duration,
}

impl SlowWaitlistRepo {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl WaitlistRepo for SlowWaitlistRepo {
    async fn insert(&self, email: &Email) -> AppResult<WaitlistEntry> {
        tokio::time::sleep(self.delay).await;
        Ok(WaitlistEntry {
            id: Uuid::new_v4(),
            email: email.as_str().to_string(),
            created_at: Utc::now(),
        })
    }
}

pub struct PanickingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for PanickingWaitlistRepo {
    async fn insert(&self, _email: &Email) -> AppResult<WaitlistEntry> {
        panic!("store driver bug");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validators::validate_email;

    #[tokio::test]
    async fn in_memory_repo_rejects_case_variants() {
        let repo = InMemoryWaitlistRepo::new();

        repo.insert(&validate_email("x@y.io").unwrap()).await.unwrap();
        let dup = repo.insert(&validate_email("X@Y.IO").unwrap()).await;

        assert!(matches!(dup, Err(AppError::DuplicateEmail)));
        assert_eq!(repo.entries().len(), 1);
    }

    #[tokio::test]
    async fn in_memory_repo_folds_ascii_only() {
        let repo = InMemoryWaitlistRepo::new();

        repo.insert(&Email::from_validated("a@bücher.de"))
            .await
            .unwrap();
        let other = repo.insert(&Email::from_validated("a@BÜCHER.de")).await;

        assert!(other.is_ok());
        assert_eq!(repo.entries().len(), 2);
    }

    #[tokio::test]
    async fn failing_repo_reports_database_error() {
        let result = FailingWaitlistRepo
            .insert(&validate_email("x@y.io").unwrap())
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
