//! Store ports consumed by the HTTP handlers.
//!
//! Each collection gets its own port with whole-collection `load`/`save` and
//! derived read-only queries. The queries are default methods that scan the
//! freshly loaded collection, so every backend keeps the same O(n),
//! uncached semantics: load the whole file, `find`/`filter` in memory.
//!
//! There is deliberately no finer-grained write operation. Handlers follow
//! load → mutate → save, and two concurrent sequences on the same collection
//! race with last-save-wins (see the persistence adapter docs).

use async_trait::async_trait;

use crate::domain::{Assignment, Class, Enrollment, Error, Submission, User};

/// Users collection.
#[async_trait]
pub trait UserRecords: Send + Sync {
    /// Load every user in historical insertion order.
    async fn load(&self) -> Result<Vec<User>, Error>;
    /// Overwrite the collection with the given ordered records.
    async fn save(&self, records: &[User]) -> Result<(), Error>;

    /// First user with this email, if any. Case-sensitive, as stored.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        Ok(self.load().await?.into_iter().find(|u| u.email == email))
    }

    /// User by record id, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, Error> {
        Ok(self.load().await?.into_iter().find(|u| u.id == id))
    }
}

/// Classes collection.
#[async_trait]
pub trait ClassRecords: Send + Sync {
    async fn load(&self) -> Result<Vec<Class>, Error>;
    async fn save(&self, records: &[Class]) -> Result<(), Error>;

    /// Class by record id, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Class>, Error> {
        Ok(self.load().await?.into_iter().find(|c| c.id == id))
    }

    /// Every class owned by the given teacher, in insertion order.
    async fn by_teacher(&self, teacher_id: &str) -> Result<Vec<Class>, Error> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|c| c.teacher_id == teacher_id)
            .collect())
    }
}

/// Assignments collection.
#[async_trait]
pub trait AssignmentRecords: Send + Sync {
    async fn load(&self) -> Result<Vec<Assignment>, Error>;
    async fn save(&self, records: &[Assignment]) -> Result<(), Error>;

    /// Every assignment attached to the given class, in insertion order.
    async fn by_class(&self, class_id: &str) -> Result<Vec<Assignment>, Error> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|a| a.class_id == class_id)
            .collect())
    }
}

/// Enrollments collection.
#[async_trait]
pub trait EnrollmentRecords: Send + Sync {
    async fn load(&self) -> Result<Vec<Enrollment>, Error>;
    async fn save(&self, records: &[Enrollment]) -> Result<(), Error>;

    /// Every enrollment held by the given student, in insertion order.
    async fn by_student(&self, student_id: &str) -> Result<Vec<Enrollment>, Error> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|e| e.student_id == student_id)
            .collect())
    }

    /// Every enrollment in the given class, in insertion order.
    async fn by_class(&self, class_id: &str) -> Result<Vec<Enrollment>, Error> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|e| e.class_id == class_id)
            .collect())
    }
}

/// Submissions collection. No route produces or consumes submissions yet;
/// the port exists so the collection is persisted-ready.
#[async_trait]
pub trait SubmissionRecords: Send + Sync {
    async fn load(&self) -> Result<Vec<Submission>, Error>;
    async fn save(&self, records: &[Submission]) -> Result<(), Error>;

    /// Every submission for the given assignment, in insertion order.
    async fn by_assignment(&self, assignment_id: &str) -> Result<Vec<Submission>, Error> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|s| s.assignment_id == assignment_id)
            .collect())
    }

    /// Every submission made by the given student, in insertion order.
    async fn by_student(&self, student_id: &str) -> Result<Vec<Submission>, Error> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|s| s.student_id == student_id)
            .collect())
    }
}
