//! Entry and user persistence.
//!
//! Two interchangeable backends sit behind [`Store`]: a JSON document on disk
//! and PostgreSQL. Both return entries most-recent-first and both enforce
//! username/email uniqueness inside `create_user`.

pub mod file;
pub mod pool;
pub mod postgres;

use std::sync::Arc;

use crate::config::StorageBackend;
use crate::error::AppResult;
use crate::models::{entry::Entry, user::User};

pub use file::JsonFileStore;
pub use postgres::PgStore;

#[derive(Clone)]
pub enum Store {
    File(Arc<JsonFileStore>),
    Postgres(PgStore),
}

impl Store {
    pub async fn connect(backend: &StorageBackend) -> anyhow::Result<Self> {
        match backend {
            StorageBackend::File { path } => {
                let store = JsonFileStore::open(path.clone()).await?;
                tracing::info!(path = %path.display(), "Using JSON file store");
                Ok(Store::File(Arc::new(store)))
            }
            StorageBackend::Postgres { database_url } => {
                let store = PgStore::connect(database_url).await?;
                tracing::info!("Using PostgreSQL store");
                Ok(Store::Postgres(store))
            }
        }
    }

    pub async fn list_entries(&self) -> AppResult<Vec<Entry>> {
        match self {
            Store::File(s) => Ok(s.list_entries().await),
            Store::Postgres(s) => s.list_entries().await,
        }
    }

    pub async fn append_entry(&self, entry: Entry) -> AppResult<()> {
        match self {
            Store::File(s) => s.append_entry(entry).await,
            Store::Postgres(s) => s.append_entry(entry).await,
        }
    }

    pub async fn clear_entries(&self) -> AppResult<()> {
        match self {
            Store::File(s) => s.clear_entries().await,
            Store::Postgres(s) => s.clear_entries().await,
        }
    }

    pub async fn find_user(&self, username_or_email: &str) -> AppResult<Option<User>> {
        match self {
            Store::File(s) => Ok(s.find_user(username_or_email).await),
            Store::Postgres(s) => s.find_user(username_or_email).await,
        }
    }

    /// Fails with `AppError::Conflict` when the username or email is taken.
    pub async fn create_user(&self, user: User) -> AppResult<()> {
        match self {
            Store::File(s) => s.create_user(user).await,
            Store::Postgres(s) => s.create_user(user).await,
        }
    }

    pub async fn ping(&self) -> bool {
        match self {
            Store::File(_) => true,
            Store::Postgres(s) => s.ping().await,
        }
    }
}
