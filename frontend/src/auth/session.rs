//! Session helpers: JWT claim decoding and `/me` resolution.
//!
//! Claims are decoded only to pick the landing page after login and to skip
//! the identity call for tokens that are already expired. The signature is
//! never checked here; `/me` is the authority.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

use crate::debug_log;
use crate::error::{ApiError, ApiResult};
use crate::models::{CurrentUser, Role};
use crate::network::ApiClient;
use crate::storage;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<serde_json::Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub papel: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry, seconds since the epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn role(&self) -> Option<Role> {
        self.papel.as_deref().or(self.role.as_deref()).and_then(Role::parse)
    }

    pub fn is_expired(&self, now_secs: i64) -> bool {
        matches!(self.exp, Some(exp) if exp <= now_secs)
    }
}

/// Decode the payload segment of a JWT.
pub fn decode_claims(token: &str) -> ApiResult<Claims> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_sig)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ApiError::Decode("token não está no formato JWT".to_string()));
    };

    // Some issuers keep the padding; the no-pad engine rejects it.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ApiError::Decode(format!("payload base64 inválido: {}", e)))?;

    Ok(serde_json::from_slice::<Claims>(&bytes)?)
}

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Resolve the stored token into the signed-in user.
///
/// `None` when there is no token or the identity call fails. The stored
/// token is removed only when the server answered with an error status.
pub async fn fetch_current_user() -> Option<CurrentUser> {
    let token = storage::load_token()?;

    if let Ok(claims) = decode_claims(&token) {
        if claims.is_expired(now_secs()) {
            debug_log!("Stored token expired, skipping /me");
            storage::clear_token();
            return None;
        }
    }

    match ApiClient::me().await {
        Ok(user) => Some(user),
        Err(e) => {
            web_sys::console::warn_1(&format!("Session resolution failed: {}", e).into());
            if discards_token(&e) {
                storage::clear_token();
            }
            None
        }
    }
}

/// An error status from `/me` means the token is no good. Transport and
/// decoding failures say nothing about it, so it stays for the next visit.
fn discards_token(err: &ApiError) -> bool {
    err.status().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_admin_claims() {
        let token = make_token(r#"{"sub":"7","email":"adm@wgg.com","papel":"admin","exp":1900000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role(), Some(Role::Admin));
        assert_eq!(claims.email.as_deref(), Some("adm@wgg.com"));
        assert!(!claims.is_expired(1_700_000_000));
        assert!(claims.is_expired(1_900_000_000));
    }

    #[test]
    fn role_alias_and_unknown_role() {
        let claims = decode_claims(&make_token(r#"{"role":"student"}"#)).unwrap();
        assert_eq!(claims.role(), Some(Role::Student));

        let claims = decode_claims(&make_token(r#"{"papel":"coach","sub":3}"#)).unwrap();
        assert_eq!(claims.role(), None);
        assert_eq!(claims.sub, Some(serde_json::json!(3)));
    }

    #[test]
    fn papel_wins_when_both_role_fields_are_present() {
        let claims = decode_claims(&make_token(r#"{"papel":"admin","role":"admin"}"#)).unwrap();
        assert_eq!(claims.role(), Some(Role::Admin));

        let claims = decode_claims(&make_token(r#"{"papel":"aluno","role":"admin"}"#)).unwrap();
        assert_eq!(claims.role(), Some(Role::Student));
    }

    #[test]
    fn only_error_statuses_discard_the_token() {
        assert!(discards_token(&ApiError::Unauthorized));
        assert!(discards_token(&ApiError::Http {
            status: 500,
            message: "boom".into(),
        }));
        assert!(!discards_token(&ApiError::Network("offline".into())));
        assert!(!discards_token(&ApiError::Decode("bad json".into())));
    }

    #[test]
    fn missing_exp_never_expires() {
        let claims = decode_claims(&make_token(r#"{"papel":"aluno"}"#)).unwrap();
        assert!(!claims.is_expired(i64::MAX));
    }

    #[test]
    fn padded_payload_is_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"papel":"aluno"}"#);
        let token = format!("h.{}.s", payload);
        assert_eq!(decode_claims(&token).unwrap().role(), Some(Role::Student));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(decode_claims("not-a-jwt"), Err(ApiError::Decode(_))));
        assert!(matches!(decode_claims("a.!!!.c"), Err(ApiError::Decode(_))));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(matches!(decode_claims(&not_json), Err(ApiError::Decode(_))));
    }
}
