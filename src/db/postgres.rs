use anyhow::Context;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{entry::Entry, user::User};

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let db = super::pool::create_pool(database_url)
            .await
            .context("Failed to create database pool")?;

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");

        Ok(Self { db })
    }

    pub async fn list_entries(&self) -> AppResult<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(
            r#"
            SELECT id, date_label, text, created_at
            FROM entries
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(entries)
    }

    pub async fn append_entry(&self, entry: Entry) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO entries (id, date_label, text, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.date_label)
        .bind(&entry.text)
        .bind(entry.created_at)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    pub async fn clear_entries(&self) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM entries").execute(&self.db).await?;
        tracing::info!(deleted = result.rows_affected(), "Cleared diary entries");
        Ok(())
    }

    pub async fn find_user(&self, username_or_email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1 OR email = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(username_or_email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    pub async fn create_user(&self, user: User) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
                "Username or email already exists!".into(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await
            .is_ok()
    }
}
