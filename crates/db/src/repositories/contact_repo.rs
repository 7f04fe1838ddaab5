//! Repository for the `contacts` table.

use sqlx::PgPool;
use ssp_core::contact::NewContact;

use crate::models::contact::Contact;

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, name, email, phone, created_at";

/// Insert and list operations for contacts. There is no update or delete.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a normalized contact, returning the stored row.
    pub async fn create(pool: &PgPool, input: &NewContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// All contacts, newest first. Rows sharing a timestamp are ordered by id.
    pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Count all contacts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
