//! Contact entity model.

use serde::Serialize;
use sqlx::FromRow;
use ssp_core::types::{DbId, Timestamp};

/// A row from the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
}
