//! Server token signing.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Claims for a long-lived server-side token.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ServerClaims {
    pub server: bool,
}

/// Sign the server token attached to every request.
///
/// Server tokens carry no expiry; revocation happens by rotating the API
/// secret.
pub(crate) fn sign_server_token(api_secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = ServerClaims { server: true };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(api_secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

    #[test]
    fn signed_token_round_trips() {
        let secret = "test_secret_key_that_is_long_enough_for_hs256";
        let token = sign_server_token(secret).expect("token should sign");
        assert!(!token.is_empty());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<ServerClaims>(
            &token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .expect("token should decode");
        assert!(data.claims.server);
    }

    #[test]
    fn tokens_are_deterministic_for_a_secret() {
        let a = sign_server_token("secret-a").expect("token should sign");
        let b = sign_server_token("secret-a").expect("token should sign");
        let c = sign_server_token("secret-b").expect("token should sign");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
