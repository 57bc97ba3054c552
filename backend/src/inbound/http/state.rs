//! Shared HTTP adapter state.
//!
//! Handlers receive the store ports through `actix_web::web::Data`, so they
//! depend only on the domain traits and stay testable against any backend.

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{
    AssignmentRecords, ClassRecords, EnrollmentRecords, SubmissionRecords, UserRecords,
};
use crate::domain::{Assignment, Class, Enrollment, Submission, User};
use crate::outbound::persistence::{DataDir, StoreError};

/// Dependency bundle for HTTP handlers: one port per record collection.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRecords>,
    pub classes: Arc<dyn ClassRecords>,
    pub assignments: Arc<dyn AssignmentRecords>,
    pub enrollments: Arc<dyn EnrollmentRecords>,
    pub submissions: Arc<dyn SubmissionRecords>,
}

impl HttpState {
    /// Wire every port to the flat-file JSON store under `data_dir`,
    /// creating the directory and seeding absent collection files.
    pub fn json_backed(data_dir: &Path) -> Result<Self, StoreError> {
        let dir = DataDir::init(data_dir)?;
        Ok(Self {
            users: Arc::new(dir.collection::<User>("users.json")?),
            classes: Arc::new(dir.collection::<Class>("classes.json")?),
            assignments: Arc::new(dir.collection::<Assignment>("assignments.json")?),
            enrollments: Arc::new(dir.collection::<Enrollment>("enrollments.json")?),
            submissions: Arc::new(dir.collection::<Submission>("submissions.json")?),
        })
    }
}
