//! Student view handlers.
//!
//! ```text
//! GET /api/student/classes  classes behind the caller's enrollments
//! ```

use actix_web::{get, web};

use crate::domain::{Error, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::classes::ClassesResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// List the classes the calling student is enrolled in. Enrollments whose
/// class no longer resolves are dropped without comment.
#[get("/student/classes")]
pub async fn enrolled_classes(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ClassesResponse>> {
    let user = session
        .current_user(state.users.as_ref())
        .await?
        .filter(|u| u.role == Role::Student)
        .ok_or_else(|| Error::unauthorized("Unauthorized"))?;

    let enrollments = state.enrollments.by_student(&user.id).await?;
    let mut classes = Vec::with_capacity(enrollments.len());
    for enrollment in &enrollments {
        if let Some(class) = state.classes.find_by_id(&enrollment.class_id).await? {
            classes.push(class);
        }
    }
    Ok(web::Json(ClassesResponse { classes }))
}
