use std::str::FromStr;

use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT handler for signing and verifying bearer tokens.
///
/// Restricted to the HMAC family: the same server-held secret signs and
/// verifies. Verification requires an `exp` claim and applies no leeway.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    pub const MIN_SECRET_LENGTH: usize = 32;
    pub const DEFAULT_ALGORITHM: &'static str = "HS256";

    /// Create a handler for `secret` signing with the named algorithm.
    ///
    /// # Arguments
    /// * `secret` - Signing secret, at least 32 bytes
    /// * `algorithm` - One of `HS256`, `HS384`, `HS512`
    ///
    /// # Errors
    /// * `WeakSecret` - Secret shorter than 32 bytes
    /// * `UnsupportedAlgorithm` - Unknown or non-HMAC algorithm name
    pub fn new(secret: &[u8], algorithm: &str) -> Result<Self, JwtError> {
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(JwtError::WeakSecret {
                min: Self::MIN_SECRET_LENGTH,
                actual: secret.len(),
            });
        }

        let algorithm = parse_algorithm(algorithm)?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign claims into a compact JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a JWT and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is at or before the current time
    /// * `InvalidToken` - Malformed token, bad signature, wrong algorithm or missing `exp`
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        // jsonwebtoken still accepts a token whose exp equals the current second
        if token_data.claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}

fn parse_algorithm(name: &str) -> Result<Algorithm, JwtError> {
    let algorithm = Algorithm::from_str(name.trim())
        .map_err(|_| JwtError::UnsupportedAlgorithm(name.to_string()))?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        _ => Err(JwtError::UnsupportedAlgorithm(name.to_string())),
    }
}
