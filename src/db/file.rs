use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{entry::Entry, user::User};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DiaryData {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    entries: Vec<Entry>,
}

/// Whole-document JSON store.
///
/// The document lives in memory behind one lock. Every mutation is applied
/// to a copy, written to `<path>.tmp`, renamed over `<path>`, and only then
/// swapped in, so a failed write leaves both memory and disk unchanged.
pub struct JsonFileStore {
    path: PathBuf,
    data: Mutex<DiaryData>,
}

impl JsonFileStore {
    pub async fn open(path: PathBuf) -> anyhow::Result<Self> {
        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<DiaryData>(&bytes) {
                Ok(data) => data,
                Err(e) => {
                    let backup = sibling(&path, ".corrupt");
                    tracing::warn!(
                        path = %path.display(),
                        backup = %backup.display(),
                        error = %e,
                        "Data file unreadable, starting with an empty store"
                    );
                    tokio::fs::rename(&path, &backup)
                        .await
                        .with_context(|| format!("Failed to move aside {}", path.display()))?;
                    let data = DiaryData::default();
                    persist(&path, &data).await?;
                    data
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let data = DiaryData::default();
                persist(&path, &data).await?;
                tracing::info!(path = %path.display(), "Created new data file");
                data
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    pub async fn list_entries(&self) -> Vec<Entry> {
        let data = self.data.lock().await;
        let mut entries: Vec<Entry> = data.entries.iter().rev().cloned().collect();
        // Stable: equal timestamps keep reverse insertion order.
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }

    pub async fn append_entry(&self, entry: Entry) -> AppResult<()> {
        self.update(|data| {
            data.entries.push(entry);
            Ok(())
        })
        .await
    }

    pub async fn clear_entries(&self) -> AppResult<()> {
        self.update(|data| {
            data.entries.clear();
            Ok(())
        })
        .await
    }

    pub async fn find_user(&self, username_or_email: &str) -> Option<User> {
        let data = self.data.lock().await;
        data.users
            .iter()
            .find(|u| u.matches_login(username_or_email))
            .cloned()
    }

    pub async fn create_user(&self, user: User) -> AppResult<()> {
        self.update(|data| {
            if data.users.iter().any(|u| u.conflicts_with(&user)) {
                return Err(AppError::Conflict(
                    "Username or email already exists!".into(),
                ));
            }
            data.users.push(user);
            Ok(())
        })
        .await
    }

    async fn update<F>(&self, mutate: F) -> AppResult<()>
    where
        F: FnOnce(&mut DiaryData) -> AppResult<()>,
    {
        let mut data = self.data.lock().await;
        let mut next = data.clone();
        mutate(&mut next)?;
        persist(&self.path, &next).await?;
        *data = next;
        Ok(())
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

async fn persist(path: &Path, data: &DiaryData) -> anyhow::Result<()> {
    let tmp = sibling(path, ".tmp");
    let bytes = serde_json::to_vec_pretty(data).context("Failed to serialize data file")?;
    tokio::fs::write(&tmp, bytes)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn temp_data_path() -> PathBuf {
    std::env::temp_dir().join(format!("diary-api-test-{}.json", uuid::Uuid::new_v4()))
}
