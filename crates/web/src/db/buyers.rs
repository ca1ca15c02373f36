//! Buyer repository for database operations.

use sqlx::SqlitePool;

use stockroom_core::{Buyer, BuyerId, Email, NewBuyer};

use super::RepositoryError;

/// Internal row type for buyer queries.
#[derive(Debug, sqlx::FromRow)]
struct BuyerRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    address: Option<String>,
}

impl TryFrom<BuyerRow> for Buyer {
    type Error = RepositoryError;

    fn try_from(row: BuyerRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: BuyerId::new(row.id),
            name: row.name,
            email,
            phone: row.phone,
            address: row.address,
        })
    }
}

/// Repository for buyer database operations.
pub struct BuyerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BuyerRepository<'a> {
    /// Create a new buyer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all buyers in store order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored email is invalid.
    pub async fn list_all(&self) -> Result<Vec<Buyer>, RepositoryError> {
        let rows = sqlx::query_as::<_, BuyerRow>(
            r"
            SELECT id, name, email, phone, address
            FROM buyers
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Insert a validated buyer. The store assigns the ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, buyer: &NewBuyer) -> Result<Buyer, RepositoryError> {
        let row = sqlx::query_as::<_, BuyerRow>(
            r"
            INSERT INTO buyers (name, email, phone, address)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, phone, address
            ",
        )
        .bind(&buyer.name)
        .bind(buyer.email.as_str())
        .bind(&buyer.phone)
        .bind(buyer.address.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "email already exists"))?;

        row.try_into()
    }

    /// Delete a buyer by ID.
    ///
    /// Returns `true` if a row was removed. A missing ID is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_by_id(&self, id: BuyerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM buyers WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
