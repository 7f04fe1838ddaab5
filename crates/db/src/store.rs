//! Contact storage behind a trait, so the API can run against Postgres or
//! an in-process store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use ssp_core::contact::NewContact;
use ssp_core::types::Timestamp;
use tokio::sync::RwLock;

use crate::models::contact::Contact;
use crate::repositories::ContactRepo;
use crate::DbPool;

/// Write and read access to stored contacts.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist a contact and return it with its id and insertion timestamp.
    async fn insert(&self, input: &NewContact) -> Result<Contact, sqlx::Error>;

    /// All contacts ordered by `created_at` descending.
    async fn list_newest_first(&self) -> Result<Vec<Contact>, sqlx::Error>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// Postgres
// ---------------------------------------------------------------------------

/// [`ContactStore`] backed by the `contacts` table.
#[derive(Clone)]
pub struct PgContactStore {
    pool: DbPool,
}

impl PgContactStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(&self, input: &NewContact) -> Result<Contact, sqlx::Error> {
        ContactRepo::create(&self.pool, input).await
    }

    async fn list_newest_first(&self) -> Result<Vec<Contact>, sqlx::Error> {
        ContactRepo::list_newest_first(&self.pool).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// [`ContactStore`] held in process memory. Contents are lost on restart.
pub struct InMemoryContactStore {
    rows: RwLock<Vec<Contact>>,
    next_id: AtomicI64,
    clock: fn() -> Timestamp,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Store whose `created_at` values come from `clock` instead of the
    /// wall clock.
    pub fn with_clock(clock: fn() -> Timestamp) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            clock,
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn insert(&self, input: &NewContact) -> Result<Contact, sqlx::Error> {
        let contact = Contact {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            created_at: (self.clock)(),
        };
        self.rows.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn list_newest_first(&self) -> Result<Vec<Contact>, sqlx::Error> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
