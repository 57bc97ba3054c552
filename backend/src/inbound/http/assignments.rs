//! Assignment handler.
//!
//! ```text
//! POST /api/assignments  teacher only, must own the target class
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::{Assignment, Error, Role, clock, ids};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_points, required, value_is_blank};

/// Assignment creation request body. `max_points` is free-typed so both
/// numeric and string payloads pass through the lenient parse.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub class_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub max_points: Option<Value>,
}

/// Create an assignment on a class the caller owns. A missing class and a
/// class owned by another teacher produce the same 404, so the endpoint
/// does not reveal which was the case.
#[post("/assignments")]
pub async fn create_assignment(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateAssignmentRequest>,
) -> ApiResult<HttpResponse> {
    let user = session
        .current_user(state.users.as_ref())
        .await?
        .filter(|u| u.role == Role::Teacher)
        .ok_or_else(|| Error::unauthorized("Unauthorized"))?;

    let body = payload.into_inner();
    if value_is_blank(body.max_points.as_ref()) {
        return Err(Error::invalid_request("All fields are required"));
    }
    let class_id = required(body.class_id, "All fields are required")?;
    let title = required(body.title, "All fields are required")?;
    let description = required(body.description, "All fields are required")?;
    let due_date = required(body.due_date, "All fields are required")?;
    let max_points = body.max_points.as_ref().and_then(parse_points);

    let class = state
        .classes
        .find_by_id(&class_id)
        .await?
        .filter(|c| c.teacher_id == user.id)
        .ok_or_else(|| Error::not_found("Class not found or unauthorized"))?;

    let mut assignments = state.assignments.load().await?;
    let assignment = Assignment {
        id: ids::record_id(),
        class_id,
        class_name: class.name.clone(),
        title,
        description,
        due_date,
        max_points,
        created_at: clock::now(),
    };
    assignments.push(assignment.clone());
    state.assignments.save(&assignments).await?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "assignment": assignment })))
}
