//! Class handlers.
//!
//! ```text
//! GET  /api/classes  teacher: own classes; student: every class
//! POST /api/classes  teacher only
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Class, Error, Role, clock, ids};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::required;

/// Class creation request body.
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub semester: Option<String>,
}

/// Envelope for class listings, shared with the student view.
#[derive(Debug, Serialize)]
pub struct ClassesResponse {
    pub classes: Vec<Class>,
}

/// List classes. Teachers see only the classes they own; students see every
/// class unconditionally — enrollment does not filter this listing.
#[get("/classes")]
pub async fn list_classes(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ClassesResponse>> {
    let user = session
        .current_user(state.users.as_ref())
        .await?
        .ok_or_else(|| Error::unauthorized("Unauthorized"))?;

    let classes = match user.role {
        Role::Teacher => state.classes.by_teacher(&user.id).await?,
        Role::Student => state.classes.load().await?,
    };
    Ok(web::Json(ClassesResponse { classes }))
}

/// Create a class with a generated id and join code. The join code is not
/// checked against existing classes.
#[post("/classes")]
pub async fn create_class(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateClassRequest>,
) -> ApiResult<HttpResponse> {
    let user = session
        .current_user(state.users.as_ref())
        .await?
        .filter(|u| u.role == Role::Teacher)
        .ok_or_else(|| Error::unauthorized("Unauthorized"))?;

    let body = payload.into_inner();
    let name = required(body.name, "All fields are required")?;
    let description = required(body.description, "All fields are required")?;
    let schedule = required(body.schedule, "All fields are required")?;
    let semester = required(body.semester, "All fields are required")?;

    let mut classes = state.classes.load().await?;
    let class = Class {
        id: ids::record_id(),
        name,
        description,
        teacher_id: user.id.clone(),
        teacher_name: user.name.clone(),
        code: ids::join_code(),
        schedule,
        semester,
        created_at: clock::now(),
    };
    classes.push(class.clone());
    state.classes.save(&classes).await?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "class": class })))
}
