//! Enrollment handler.
//!
//! ```text
//! POST /api/enrollments {"classCode":"AB12CD"}  student only
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Enrollment, Error, Role, clock, ids};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::required;

/// Enrollment request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub class_code: Option<String>,
}

/// Enroll the calling student in the class matching the join code. The
/// supplied code is upper-cased before comparison, so codes are effectively
/// case-insensitive on input.
#[post("/enrollments")]
pub async fn enroll(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<EnrollRequest>,
) -> ApiResult<HttpResponse> {
    let user = session
        .current_user(state.users.as_ref())
        .await?
        .filter(|u| u.role == Role::Student)
        .ok_or_else(|| Error::unauthorized("Unauthorized"))?;

    let class_code = required(payload.into_inner().class_code, "Class code is required")?;
    let code = class_code.to_uppercase();

    let classes = state.classes.load().await?;
    let target = classes
        .into_iter()
        .find(|c| c.code == code)
        .ok_or_else(|| Error::not_found("Invalid class code"))?;

    let mut enrollments = state.enrollments.load().await?;
    let already_enrolled = enrollments
        .iter()
        .any(|e| e.student_id == user.id && e.class_id == target.id);
    if already_enrolled {
        return Err(Error::conflict("Already enrolled in this class"));
    }

    let enrollment = Enrollment {
        id: ids::record_id(),
        student_id: user.id.clone(),
        class_id: target.id.clone(),
        enrolled_at: clock::now(),
    };
    enrollments.push(enrollment.clone());
    state.enrollments.save(&enrollments).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "enrollment": enrollment,
        "class": target,
    })))
}
