use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use virtualfridge_core::domain::identity::value_objects::Identity;

use super::http::server::api_entities::api_error::ApiError;

/// Claims we read out of the bearer token. The token is minted and signed
/// by the external identity provider; the gateway in front of this service
/// verifies the signature, so only the payload segment is read here.
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: String,
    email: Option<String>,
}

fn identity_from_token(token: &str) -> Option<Identity> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }

    let decoded = general_purpose::URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| {
            tracing::error!("Failed to decode token payload: {:?}", e);
            e
        })
        .ok()?;

    let payload = String::from_utf8(decoded).ok()?;
    let claims: TokenClaims = serde_json::from_str(&payload)
        .map_err(|e| {
            tracing::error!("Failed to deserialize token claims: {:?}", e);
            e
        })
        .ok()?;

    let user_id = Uuid::parse_str(&claims.sub).ok()?;
    Some(Identity::new(user_id, claims.email))
}

/// Optional auth middleware: a valid Bearer token sets the request
/// Identity, anything else passes through and is rejected later by
/// [`RequiredIdentity`].
pub async fn auth(mut req: Request, next: Next) -> Result<Response, StatusCode> {
    if let Some(auth_header) = req.headers().get("authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && !token.is_empty()
        && let Some(identity) = identity_from_token(token)
    {
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

/// Extractor for handlers that must know who is calling.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Authentication required: provide a Bearer token".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256"}"#);
        let body = general_purpose::URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_identity_from_valid_token() {
        let user_id = Uuid::new_v4();
        let token = token_with_payload(&format!(
            r#"{{"sub":"{user_id}","email":"user@example.com"}}"#
        ));

        let identity = identity_from_token(&token).unwrap();
        assert_eq!(identity.id(), user_id);
        assert_eq!(identity.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_identity_requires_three_segments() {
        assert!(identity_from_token("only.two").is_none());
    }

    #[test]
    fn test_identity_rejects_non_uuid_subject() {
        let token = token_with_payload(r#"{"sub":"not-a-uuid"}"#);
        assert!(identity_from_token(&token).is_none());
    }

    #[test]
    fn test_identity_rejects_garbage_payload() {
        assert!(identity_from_token("a.%%%.c").is_none());
    }
}
