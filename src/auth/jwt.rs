use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

pub fn create_token(user_id: Uuid, username: &str, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: (now + Duration::seconds(config.jwt_ttl_secs)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, config: &Config) -> AppResult<TokenData<Claims>> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[test]
    fn test_token_round_trip_keeps_identity() {
        let config = test_config();
        let id = Uuid::new_v4();
        let token = create_token(id, "ana", &config).unwrap();
        let data = verify_token(&token, &config).unwrap();
        assert_eq!(data.claims.sub, id);
        assert_eq!(data.claims.username, "ana");
        assert_eq!(data.claims.exp - data.claims.iat, config.jwt_ttl_secs);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let token = create_token(Uuid::new_v4(), "ana", &config).unwrap();

        let mut other = test_config();
        other.jwt_secret = "another-secret".into();
        assert!(matches!(
            verify_token(&token, &other),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut config = test_config();
        // Past the default 60s leeway.
        config.jwt_ttl_secs = -120;
        let token = create_token(Uuid::new_v4(), "ana", &config).unwrap();
        assert!(verify_token(&token, &config).is_err());
    }
}
