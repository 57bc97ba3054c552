//! Account handlers: register, login, whoami.
//!
//! ```text
//! POST /api/auth/register {"email":..,"password":..,"name":..,"role":"student"|"teacher"}
//! POST /api/auth/login    {"email":..,"password":..}
//! GET  /api/auth/me
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Role, User, clock, ids};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::{SessionContext, SessionSettings, SessionState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::required;

/// Registration request body. Fields are checked for presence by hand so a
/// missing field reads the same as an empty one.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public view of an account: everything except timestamps. No credential
/// exists to leak.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    success: bool,
    user: UserInfo,
}

#[derive(Debug, Serialize)]
struct MeResponse {
    user: UserInfo,
}

/// Create an account. The supplied password is required but discarded: no
/// credential is stored (see [`crate::domain::credentials`]).
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let email = required(body.email, "All fields are required")?;
    let _password = required(body.password, "All fields are required")?;
    let name = required(body.name, "All fields are required")?;
    let role = required(body.role, "All fields are required")?;
    let role = Role::parse(&role).ok_or_else(|| Error::invalid_request("Invalid role"))?;

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(Error::conflict("User already exists"));
    }

    let mut users = state.users.load().await?;
    let user = User {
        id: ids::record_id(),
        email,
        name,
        role,
        created_at: clock::now(),
    };
    users.push(user.clone());
    state.users.save(&users).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        user: UserInfo::from(&user),
    }))
}

/// Authenticate and set the session cookie.
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    settings: web::Data<SessionSettings>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let email = required(body.email, "Email and password are required")?;
    let password = required(body.password, "Email and password are required")?;

    // Unknown email and wrong password produce identical responses so the
    // endpoint cannot be used to enumerate accounts.
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| Error::unauthorized("Invalid credentials"))?;

    // Demo credential check: the password must equal the lower-cased display
    // name. Registration stored nothing to compare against.
    if password != user.name.to_lowercase() {
        return Err(Error::unauthorized("Invalid credentials"));
    }

    let cookie = SessionContext::issue_cookie(&user.id, *settings.get_ref());
    Ok(HttpResponse::Ok().cookie(cookie).json(AuthResponse {
        success: true,
        user: UserInfo::from(&user),
    }))
}

/// Resolve the calling user from the session cookie. The only endpoint that
/// distinguishes a stale user id (404) from a missing or garbled cookie
/// (401).
#[get("/auth/me")]
pub async fn me(state: web::Data<HttpState>, session: SessionContext) -> ApiResult<HttpResponse> {
    let user_id = match session.state() {
        SessionState::Missing => return Err(Error::unauthorized("Not authenticated")),
        SessionState::Invalid => return Err(Error::unauthorized("Invalid session")),
        // JSON that parsed but names no user reads like a stale id: the
        // lookup misses.
        SessionState::Unidentified => return Err(Error::not_found("User not found")),
        SessionState::Bearer(id) => id.clone(),
    };

    let user = state
        .users
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| Error::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(MeResponse {
        user: UserInfo::from(&user),
    }))
}
