//! Session resolution for the catalog API.
//!
//! Identity resolution is the single authoritative gate: a request carries a
//! session token via the `Authorization` header or the session cookie, and
//! the token must resolve through the [`SessionStore`]. There is no runtime
//! bypass; tests inject identities by constructing an [`InMemorySessions`].

use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use ironlog_domain::Catalog;
use uuid::Uuid;

use crate::{ApiError, AppState};

pub const SESSION_COOKIE: &str = "ironlog_session";

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct UserID(Uuid);

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

pub trait SessionStore: Send + Sync {
    fn resolve(&self, token: &str) -> Option<UserID>;
}

#[derive(Debug, Default)]
pub struct InMemorySessions {
    tokens: HashMap<String, UserID>,
}

impl InMemorySessions {
    #[must_use]
    pub fn new(tokens: HashMap<String, UserID>) -> Self {
        Self { tokens }
    }
}

impl SessionStore for InMemorySessions {
    fn resolve(&self, token: &str) -> Option<UserID> {
        self.tokens.get(token).copied()
    }
}

/// The authenticated caller. Extraction fails with 401 before any catalog
/// access if no valid session token is attached to the request.
pub struct CurrentUser(pub UserID);

impl<C: Catalog> FromRequestParts<AppState<C>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<C>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or(ApiError::Unauthorized)?;
        state
            .sessions
            .resolve(&token)
            .map(CurrentUser)
            .ok_or(ApiError::Unauthorized)
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(ToString::to_string)
}

fn cookie_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn parts(headers: &[(header::HeaderName, &str)]) -> Parts {
        let mut request = Request::builder();
        for (name, value) in headers {
            request = request.header(name, *value);
        }
        request.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_resolve_token() {
        let sessions = InMemorySessions::new(HashMap::from([
            ("secret".to_string(), UserID::from(1)),
            ("other".to_string(), UserID::from(2)),
        ]));

        assert_eq!(sessions.resolve("secret"), Some(UserID::from(1)));
        assert_eq!(sessions.resolve("missing"), None);
        assert_eq!(InMemorySessions::default().resolve("secret"), None);
    }

    #[rstest]
    #[case(&[(header::AUTHORIZATION, "Bearer secret")], Some("secret"))]
    #[case(&[(header::AUTHORIZATION, "Basic secret")], None)]
    #[case(&[(header::AUTHORIZATION, "secret")], None)]
    #[case(&[], None)]
    fn test_bearer_token(
        #[case] headers: &[(header::HeaderName, &str)],
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            bearer_token(&parts(headers)).as_deref(),
            expected
        );
    }

    #[rstest]
    #[case(&[(header::COOKIE, "ironlog_session=secret")], Some("secret"))]
    #[case(&[(header::COOKIE, "theme=dark; ironlog_session=secret")], Some("secret"))]
    #[case(&[(header::COOKIE, "theme=dark")], None)]
    #[case(&[], None)]
    fn test_cookie_token(
        #[case] headers: &[(header::HeaderName, &str)],
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            cookie_token(&parts(headers)).as_deref(),
            expected
        );
    }
}
