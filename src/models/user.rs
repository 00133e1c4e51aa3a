use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Older data files stored this under `password`.
    #[serde(alias = "password")]
    pub password_hash: String,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Login accepts either the username or the email.
    pub fn matches_login(&self, username_or_email: &str) -> bool {
        self.username == username_or_email || self.email == username_or_email
    }

    pub fn conflicts_with(&self, other: &User) -> bool {
        self.username == other.username || self.email == other.email
    }
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_login_by_username_or_email() {
        let user = User::new("ana".into(), "ana@example.com".into(), "hash".into());
        assert!(user.matches_login("ana"));
        assert!(user.matches_login("ana@example.com"));
        assert!(!user.matches_login("bob"));
    }

    #[test]
    fn test_conflicts_on_either_field() {
        let ana = User::new("ana".into(), "ana@example.com".into(), "h".into());
        let same_name = User::new("ana".into(), "other@example.com".into(), "h".into());
        let same_mail = User::new("bob".into(), "ana@example.com".into(), "h".into());
        let distinct = User::new("bob".into(), "bob@example.com".into(), "h".into());
        assert!(ana.conflicts_with(&same_name));
        assert!(ana.conflicts_with(&same_mail));
        assert!(!ana.conflicts_with(&distinct));
    }

    #[test]
    fn test_reads_legacy_password_key() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "9b2f6c1e-0a3d-4e5f-8a7b-6c5d4e3f2a1b",
                "username": "ana",
                "email": "ana@example.com",
                "password": "plain",
                "created_at": "2026-10-19T08:00:00.5"
            }"#,
        )
        .unwrap();
        assert_eq!(user.password_hash, "plain");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_some());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_summary_has_no_password() {
        let user = User::new("ana".into(), "ana@example.com".into(), "secret-hash".into());
        let json = serde_json::to_value(UserSummary::from(&user)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "ana");
    }
}
