use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    entities::{email::Email, waitlist_entry::WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, email: &Email) -> AppResult<WaitlistEntry> {
        // Uniqueness is enforced by waitlist_entries_email_lower_key.
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            r#"INSERT INTO waitlist_entries (id, email)
               VALUES ($1, $2)
               RETURNING id, email, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(rec)
    }
}
