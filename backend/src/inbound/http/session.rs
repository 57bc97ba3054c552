//! Session cookie helpers.
//!
//! The session token is the literal JSON `{"userId":"<id>"}` carried in a
//! cookie. There is no signature, no server-side session table, and no
//! revocation: possession of the cookie value is sufficient to act as the
//! user until the cookie expires. Handlers treat a missing cookie, an
//! unparseable cookie, and an unknown user id alike as "no identity"; only
//! the whoami endpoint tells those cases apart.

use std::future::{Ready, ready};

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::Serialize;
use serde_json::Value;

use crate::domain::ports::UserRecords;
use crate::domain::{Error, User};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

const SESSION_MAX_AGE_DAYS: i64 = 7;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionToken {
    user_id: String,
}

/// What the request's session cookie resolved to, before any user lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session cookie on the request.
    Missing,
    /// A cookie was present but its value is not JSON at all.
    Invalid,
    /// The value parsed as JSON but carries no string `userId` field. Reads
    /// as an id that resolves to no user: handlers see "no identity" and
    /// the whoami lookup misses.
    Unidentified,
    /// A well-formed token carrying this user id. The id is not yet
    /// validated against the user collection.
    Bearer(String),
}

/// Extractor giving handlers the parsed session cookie.
pub struct SessionContext {
    state: SessionState,
}

/// Cookie issuance settings shared through app data.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Mark issued cookies `Secure` (production behind TLS).
    pub cookie_secure: bool,
}

impl SessionContext {
    /// The parsed state of the session cookie.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The bearer user id, if a well-formed token was presented.
    pub fn user_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::Bearer(id) => Some(id),
            SessionState::Missing | SessionState::Invalid | SessionState::Unidentified => None,
        }
    }

    /// Resolve the calling user, collapsing every failure mode to `None`.
    pub async fn current_user(&self, users: &dyn UserRecords) -> Result<Option<User>, Error> {
        match self.user_id() {
            Some(id) => users.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Build the session cookie issued on successful login: HttpOnly,
    /// SameSite=Lax, path `/`, 7-day max-age, `Secure` when configured.
    pub fn issue_cookie(user_id: &str, settings: SessionSettings) -> Cookie<'static> {
        let token = SessionToken {
            user_id: user_id.to_owned(),
        };
        let value = serde_json::to_string(&token).unwrap_or_default();
        Cookie::build(SESSION_COOKIE, value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(settings.cookie_secure)
            .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
            .finish()
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.cookie(SESSION_COOKIE) {
            None => SessionState::Missing,
            Some(cookie) => match serde_json::from_str::<Value>(cookie.value()) {
                Ok(token) => match token.get("userId").and_then(Value::as_str) {
                    Some(id) => SessionState::Bearer(id.to_owned()),
                    None => SessionState::Unidentified,
                },
                Err(_) => SessionState::Invalid,
            },
        };
        ready(Ok(Self { state }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    async fn extract(req: &HttpRequest) -> SessionContext {
        SessionContext::from_request(req, &mut Payload::None)
            .await
            .expect("extraction is infallible")
    }

    #[actix_web::test]
    async fn missing_cookie_resolves_to_missing() {
        let req = TestRequest::default().to_http_request();
        let session = extract(&req).await;
        assert_eq!(session.state(), &SessionState::Missing);
        assert_eq!(session.user_id(), None);
    }

    #[actix_web::test]
    async fn unparseable_cookie_resolves_to_invalid() {
        for value in ["garbage", "{broken", ""] {
            let req = TestRequest::default()
                .cookie(Cookie::new(SESSION_COOKIE, value))
                .to_http_request();
            let session = extract(&req).await;
            assert_eq!(session.state(), &SessionState::Invalid, "value: {value}");
            assert_eq!(session.user_id(), None);
        }
    }

    #[actix_web::test]
    async fn parsed_json_without_a_user_id_is_unidentified() {
        // Valid JSON that names no string userId: wrong shape, wrong type,
        // or not an object at all.
        for value in ["{\"wrong\":\"shape\"}", "{\"userId\":5}", "5", "null"] {
            let req = TestRequest::default()
                .cookie(Cookie::new(SESSION_COOKIE, value))
                .to_http_request();
            let session = extract(&req).await;
            assert_eq!(session.state(), &SessionState::Unidentified, "value: {value}");
            assert_eq!(session.user_id(), None);
        }
    }

    #[actix_web::test]
    async fn bearer_token_exposes_the_user_id() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "{\"userId\":\"u1\"}"))
            .to_http_request();
        let session = extract(&req).await;
        assert_eq!(session.user_id(), Some("u1"));
    }

    #[test]
    fn issued_cookie_carries_the_contracted_attributes() {
        let cookie = SessionContext::issue_cookie(
            "abc123def",
            SessionSettings {
                cookie_secure: false,
            },
        );
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "{\"userId\":\"abc123def\"}");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn secure_flag_follows_settings() {
        let cookie = SessionContext::issue_cookie("u1", SessionSettings { cookie_secure: true });
        assert_eq!(cookie.secure(), Some(true));
    }
}
