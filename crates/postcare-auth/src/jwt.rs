use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// Lifetime of tokens minted by [`TokenKeys::issue_default`].
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_hours(15 * 24);

const DOCTOR_ROLE: &str = "DOCTOR";

/// Claims carried by a postcare bearer token.
///
/// Patient tokens carry `userId`; doctor tokens carry `doctorId` and
/// `role: "DOCTOR"`. The names match the tokens the mobile app and dashboard
/// already hold.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "doctorId", default, skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub exp: u64,
    pub iat: u64,
}

/// Who a validated token speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Patient(Uuid),
    Doctor(Uuid),
}

impl TryFrom<Claims> for Identity {
    type Error = AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let parse = |raw: &str| {
            raw.parse::<Uuid>()
                .map_err(|e| AuthError::InvalidToken(format!("bad subject id: {e}")))
        };

        match (claims.role.as_deref(), claims.doctor_id, claims.user_id) {
            (Some(DOCTOR_ROLE), Some(doctor_id), _) => Ok(Identity::Doctor(parse(&doctor_id)?)),
            (Some(role), _, _) if role != DOCTOR_ROLE => {
                Err(AuthError::InvalidToken(format!("unknown role: {role}")))
            }
            (None, _, Some(user_id)) => Ok(Identity::Patient(parse(&user_id)?)),
            _ => Err(AuthError::InvalidToken("token names no subject".to_string())),
        }
    }
}

/// HS256 signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Mint a token for `identity` that expires after `ttl`.
    pub fn issue(&self, identity: Identity, ttl: SignedDuration) -> Result<String, AuthError> {
        let now = Timestamp::now().as_second();
        let exp = now.saturating_add(ttl.as_secs()).max(0) as u64;

        let claims = match identity {
            Identity::Patient(id) => Claims {
                user_id: Some(id.to_string()),
                doctor_id: None,
                role: None,
                exp,
                iat: now as u64,
            },
            Identity::Doctor(id) => Claims {
                user_id: None,
                doctor_id: Some(id.to_string()),
                role: Some(DOCTOR_ROLE.to_string()),
                exp,
                iat: now as u64,
            },
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    pub fn issue_default(&self, identity: Identity) -> Result<String, AuthError> {
        self.issue(identity, DEFAULT_TOKEN_TTL)
    }

    /// Verify signature and expiry, then resolve the token's identity.
    pub fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::Jwt(e),
            }
        })?;

        Identity::try_from(token_data.claims)
    }
}
