use anyhow::{bail, Context};
use std::env;
use std::path::PathBuf;

const DEFAULT_JWT_SECRET: &str = "jwt_secret_key_here";
const MAX_JWT_TTL_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    File { path: PathBuf },
    Postgres { database_url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    pub storage: StorageBackend,

    pub jwt_secret: String,
    pub jwt_ttl_secs: i64,
    pub require_auth: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage = match var("STORAGE_BACKEND", "file").to_lowercase().as_str() {
            "file" => StorageBackend::File {
                path: PathBuf::from(var("DATA_FILE", "data.json")),
            },
            "postgres" => StorageBackend::Postgres {
                database_url: lookup("DATABASE_URL")
                    .filter(|s| !s.is_empty())
                    .context("DATABASE_URL must be set when STORAGE_BACKEND=postgres")?,
            },
            other => bail!("STORAGE_BACKEND must be `file` or `postgres`, got `{other}`"),
        };

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set, falling back to the development secret");
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        let jwt_ttl_secs: i64 = var("JWT_TTL_SECS", "86400")
            .parse()
            .context("JWT_TTL_SECS must be a number")?;
        if !(1..=MAX_JWT_TTL_SECS).contains(&jwt_ttl_secs) {
            bail!("JWT_TTL_SECS must be between 1 and {MAX_JWT_TTL_SECS}, got {jwt_ttl_secs}");
        }

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "5000")
                .parse()
                .context("PORT must be a number")?,
            frontend_url: var("FRONTEND_URL", "http://localhost:3000"),
            cors_extra_origins: lookup("CORS_EXTRA_ORIGINS")
                .map(|extra| {
                    extra
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),

            storage,

            jwt_secret,
            jwt_ttl_secs,
            require_auth: var("REQUIRE_AUTH", "false")
                .parse()
                .context("REQUIRE_AUTH must be `true` or `false`")?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        host: "127.0.0.1".into(),
        port: 0,
        frontend_url: "http://localhost:3000".into(),
        cors_extra_origins: Vec::new(),
        storage: StorageBackend::File {
            path: PathBuf::from("unused.json"),
        },
        jwt_secret: "test-secret".into(),
        jwt_ttl_secs: 3600,
        require_auth: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:5000");
        assert_eq!(
            config.storage,
            StorageBackend::File {
                path: PathBuf::from("data.json")
            }
        );
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.jwt_ttl_secs, 86400);
        assert!(!config.require_auth);
        assert!(config.cors_extra_origins.is_empty());
    }

    #[test]
    fn test_postgres_requires_database_url() {
        assert!(config_from(&[("STORAGE_BACKEND", "postgres")]).is_err());

        let config = config_from(&[
            ("STORAGE_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/diary"),
        ])
        .unwrap();
        assert_eq!(
            config.storage,
            StorageBackend::Postgres {
                database_url: "postgres://localhost/diary".into()
            }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("REQUIRE_AUTH", "yes")]).is_err());
        assert!(config_from(&[("STORAGE_BACKEND", "mongo")]).is_err());
    }

    #[test]
    fn test_jwt_ttl_range_checked_at_startup() {
        assert!(config_from(&[("JWT_TTL_SECS", "0")]).is_err());
        assert!(config_from(&[("JWT_TTL_SECS", "-60")]).is_err());
        assert!(config_from(&[("JWT_TTL_SECS", &i64::MAX.to_string())]).is_err());

        let config = config_from(&[("JWT_TTL_SECS", "31536000")]).unwrap();
        assert_eq!(config.jwt_ttl_secs, MAX_JWT_TTL_SECS);
    }

    #[test]
    fn test_extra_origins_are_split_and_trimmed() {
        let config = config_from(&[(
            "CORS_EXTRA_ORIGINS",
            "http://192.168.1.5:3000, http://10.0.0.2:3000,",
        )])
        .unwrap();
        assert_eq!(
            config.cors_extra_origins,
            vec!["http://192.168.1.5:3000", "http://10.0.0.2:3000"]
        );
    }
}
