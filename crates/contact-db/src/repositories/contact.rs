//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use contact_core::entities::Contact;
use contact_core::error::DomainError;
use contact_core::traits::{ContactRepository, ContactSearch, RepoResult};

use crate::models::ContactModel;

use super::error::{contact_not_found, map_db_error, map_unique_violation};
use super::transaction::PgUnitOfWork;

/// Filter shared by `search` and `count`, so both see the same rows.
/// A NULL parameter disables its filter.
const SEARCH_PREDICATE: &str = r"
    WHERE user_id = $1
      AND ($2::TEXT IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2)
      AND ($3::TEXT IS NULL OR email ILIKE $3)
      AND ($4::TEXT IS NULL OR phone ILIKE $4)
";

/// Turn a user-supplied filter into a substring `ILIKE` pattern with the
/// wildcard characters matched literally.
pub fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

struct SearchPatterns {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl From<&ContactSearch> for SearchPatterns {
    fn from(query: &ContactSearch) -> Self {
        Self {
            name: query.name.as_deref().map(like_pattern),
            email: query.email.as_deref().map(like_pattern),
            phone: query.phone.as_deref().map(like_pattern),
        }
    }
}

#[async_trait]
impl ContactRepository for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn find_by_id_and_user(
        &mut self,
        id: Uuid,
        user_id: &str,
    ) -> RepoResult<Option<Contact>> {
        let result = sqlx::query_as::<_, ContactModel>(
            r"
            SELECT id, user_id, first_name, last_name, email, phone, created_at, updated_at
            FROM contacts
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Contact::from))
    }

    #[instrument(skip(self))]
    async fn find_for_update(&mut self, id: Uuid, user_id: &str) -> RepoResult<Option<Contact>> {
        let result = sqlx::query_as::<_, ContactModel>(
            r"
            SELECT id, user_id, first_name, last_name, email, phone, created_at, updated_at
            FROM contacts
            WHERE id = $1 AND user_id = $2
            FOR UPDATE
            ",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Contact::from))
    }

    #[instrument(skip(self, contact), fields(contact_id = %contact.id))]
    async fn create(&mut self, contact: &Contact) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contacts (id, user_id, first_name, last_name, email, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(contact.id)
        .bind(&contact.user_id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::Duplicate(contact.id.to_string())))?;

        Ok(())
    }

    #[instrument(skip(self, contact), fields(contact_id = %contact.id))]
    async fn update(&mut self, contact: &Contact) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone = $6, updated_at = $7
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(contact.id)
        .bind(&contact.user_id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(contact_not_found(contact.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&mut self, id: Uuid, user_id: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM contacts
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id)
        .bind(user_id)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(contact_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, query), fields(user_id = %query.user_id, page = query.page.page()))]
    async fn search(&mut self, query: &ContactSearch) -> RepoResult<Vec<Contact>> {
        let patterns = SearchPatterns::from(query);
        let sql = format!(
            r"
            SELECT id, user_id, first_name, last_name, email, phone, created_at, updated_at
            FROM contacts
            {SEARCH_PREDICATE}
            ORDER BY created_at, id
            LIMIT $5 OFFSET $6
            "
        );

        let rows = sqlx::query_as::<_, ContactModel>(&sql)
            .bind(&query.user_id)
            .bind(patterns.name)
            .bind(patterns.email)
            .bind(patterns.phone)
            .bind(query.page.size())
            .bind(query.page.offset())
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    #[instrument(skip(self, query), fields(user_id = %query.user_id))]
    async fn count(&mut self, query: &ContactSearch) -> RepoResult<i64> {
        let patterns = SearchPatterns::from(query);
        let sql = format!("SELECT COUNT(*) FROM contacts {SEARCH_PREDICATE}");

        let total = sqlx::query_scalar::<_, i64>(&sql)
            .bind(&query.user_id)
            .bind(patterns.name)
            .bind(patterns.email)
            .bind(patterns.phone)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_db_error)?;

        Ok(total)
    }
}
