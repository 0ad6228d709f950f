use anyhow::{Context, Result};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, DecodingKey, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Install the token validation secret at startup. Uses the configured
/// secret when present; otherwise generates a development secret, which
/// means previously issued tokens stop validating after a restart.
pub fn initialize_secret(configured: Option<String>) {
    let secret = match configured {
        Some(s) => s,
        None => {
            tracing::warn!("No jwt_secret configured, generating a development secret");
            generate_jwt_secret()
        }
    };
    let _ = JWT_SECRET.set(secret);
}

/// Validate an access token and extract its claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = JWT_SECRET
        .get()
        .context("JWT secret has not been initialized")?;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate a cryptographically secure secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn claims(exp_offset_secs: i64) -> TokenClaims {
        let now = chrono::Utc::now().timestamp();
        TokenClaims {
            sub: "user-1".into(),
            username: "alice".into(),
            exp: (now + exp_offset_secs) as usize,
            iat: now as usize,
        }
    }

    #[test]
    fn valid_token_round_trips() {
        initialize_secret(Some("test-secret".into()));
        let secret = JWT_SECRET.get().unwrap();
        let token = encode(
            &Header::default(),
            &claims(3600),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let decoded = validate_token(&token).unwrap();
        assert_eq!(decoded.sub, "user-1");
        assert_eq!(decoded.username, "alice");
    }

    #[test]
    fn expired_token_is_rejected() {
        initialize_secret(Some("test-secret".into()));
        let secret = JWT_SECRET.get().unwrap();
        let token = encode(
            &Header::default(),
            &claims(-3600),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token).is_err());
    }
}
