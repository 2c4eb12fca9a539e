//! Activity repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD over the student's tracked activities.
//!
//! # Invariants
//! - Activity ids are unique within one repository.
//! - `list_activities` returns insertion order; sorting is a service concern.

use crate::model::activity::{Activity, ActivityId, ActivityValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for activity storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ActivityValidationError),
    NotFound(ActivityId),
    DuplicateId(ActivityId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "activity not found: {id}"),
            Self::DuplicateId(id) => write!(f, "activity id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<ActivityValidationError> for RepoError {
    fn from(value: ActivityValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for activity CRUD operations.
pub trait ActivityRepository {
    fn create_activity(&mut self, activity: Activity) -> RepoResult<ActivityId>;
    fn get_activity(&self, id: &str) -> RepoResult<Option<Activity>>;
    fn list_activities(&self) -> RepoResult<Vec<Activity>>;
    fn delete_activity(&mut self, id: &str) -> RepoResult<()>;
}

/// Vec-backed activity repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    activities: Vec<Activity>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository, rejecting duplicate ids.
    pub fn with_activities(activities: Vec<Activity>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for activity in activities {
            repo.create_activity(activity)?;
        }
        Ok(repo)
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    fn create_activity(&mut self, activity: Activity) -> RepoResult<ActivityId> {
        if self.activities.iter().any(|existing| existing.id == activity.id) {
            return Err(RepoError::DuplicateId(activity.id));
        }
        let id = activity.id.clone();
        self.activities.push(activity);
        Ok(id)
    }

    fn get_activity(&self, id: &str) -> RepoResult<Option<Activity>> {
        Ok(self
            .activities
            .iter()
            .find(|activity| activity.id == id)
            .cloned())
    }

    fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        Ok(self.activities.clone())
    }

    fn delete_activity(&mut self, id: &str) -> RepoResult<()> {
        let before = self.activities.len();
        self.activities.retain(|activity| activity.id != id);
        if self.activities.len() == before {
            return Err(RepoError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivityRepository, InMemoryActivityRepository, RepoError};
    use crate::fixtures::tracked_activities;

    #[test]
    fn seeding_rejects_duplicate_ids() {
        let mut activities = tracked_activities();
        activities.push(activities[0].clone());
        let err = InMemoryActivityRepository::with_activities(activities)
            .expect_err("duplicate id must fail");
        assert_eq!(err, RepoError::DuplicateId("1".to_string()));
    }

    #[test]
    fn delete_reports_missing_id() {
        let mut repo = InMemoryActivityRepository::with_activities(tracked_activities()).unwrap();
        repo.delete_activity("2").expect("delete existing");
        assert_eq!(repo.get_activity("2").unwrap(), None);
        assert_eq!(
            repo.delete_activity("2").expect_err("second delete must fail"),
            RepoError::NotFound("2".to_string())
        );
    }
}
