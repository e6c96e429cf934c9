//! PostgreSQL implementation of AddressRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use contact_core::entities::Address;
use contact_core::error::DomainError;
use contact_core::traits::{AddressRepository, RepoResult};

use crate::models::AddressModel;

use super::error::{address_not_found, map_db_error, map_unique_violation};
use super::transaction::PgUnitOfWork;

#[async_trait]
impl AddressRepository for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn find_by_id_and_contact(
        &mut self,
        id: Uuid,
        contact_id: Uuid,
    ) -> RepoResult<Option<Address>> {
        let result = sqlx::query_as::<_, AddressModel>(
            r"
            SELECT id, contact_id, street, city, province, postal_code, country, created_at, updated_at
            FROM addresses
            WHERE id = $1 AND contact_id = $2
            FOR UPDATE
            ",
        )
        .bind(id)
        .bind(contact_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Address::from))
    }

    #[instrument(skip(self))]
    async fn find_by_contact(&mut self, contact_id: Uuid) -> RepoResult<Vec<Address>> {
        let rows = sqlx::query_as::<_, AddressModel>(
            r"
            SELECT id, contact_id, street, city, province, postal_code, country, created_at, updated_at
            FROM addresses
            WHERE contact_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(contact_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Address::from).collect())
    }

    #[instrument(skip(self, address), fields(address_id = %address.id))]
    async fn create(&mut self, address: &Address) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO addresses (id, contact_id, street, city, province, postal_code, country, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(address.id)
        .bind(address.contact_id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.postal_code)
        .bind(&address.country)
        .bind(address.created_at)
        .bind(address.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::Duplicate(address.id.to_string())))?;

        Ok(())
    }

    #[instrument(skip(self, address), fields(address_id = %address.id))]
    async fn update(&mut self, address: &Address) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE addresses
            SET street = $3, city = $4, province = $5, postal_code = $6, country = $7, updated_at = $8
            WHERE id = $1 AND contact_id = $2
            ",
        )
        .bind(address.id)
        .bind(address.contact_id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.postal_code)
        .bind(&address.country)
        .bind(address.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(address_not_found(address.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&mut self, id: Uuid, contact_id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM addresses
            WHERE id = $1 AND contact_id = $2
            ",
        )
        .bind(id)
        .bind(contact_id)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(address_not_found(id));
        }

        Ok(())
    }
}
