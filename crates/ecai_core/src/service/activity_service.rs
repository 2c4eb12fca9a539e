//! Activity tracking use-case service.
//!
//! # Responsibility
//! - List activities with name filter and sort order.
//! - Add activities and log hours from form drafts.
//!
//! # Invariants
//! - Name filtering is case-insensitive substring match.
//! - `hours` sort is descending by hours per week; the other sorts ascend.
//! - Form failures surface as `Missing Information` notices.

use crate::model::activity::{Activity, ActivityDraft, HourLog, HourLogDraft};
use crate::repo::activity_repo::{ActivityRepository, RepoError, RepoResult};
use crate::service::notice::Notice;
use log::info;
use std::cmp::Ordering;

/// Sort orders offered on the activity list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivitySort {
    #[default]
    Alphabetical,
    CareerField,
    Hours,
}

impl ActivitySort {
    /// Parses the select value used by the list screen.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "alphabetical" => Some(Self::Alphabetical),
            "career-field" => Some(Self::CareerField),
            "hours" => Some(Self::Hours),
            _ => None,
        }
    }

    fn compare(self, a: &Activity, b: &Activity) -> Ordering {
        match self {
            Self::Alphabetical => compare_text(&a.name, &b.name),
            Self::CareerField => compare_text(&a.kind, &b.kind),
            Self::Hours => b.hours_per_week.total_cmp(&a.hours_per_week),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Use-case service over an activity repository.
pub struct ActivityService<R: ActivityRepository> {
    repo: R,
    hour_logs: Vec<HourLog>,
}

impl<R: ActivityRepository> ActivityService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            hour_logs: Vec::new(),
        }
    }

    /// Activities whose name contains `search`, in `sort` order.
    pub fn list(&self, search: &str, sort: ActivitySort) -> RepoResult<Vec<Activity>> {
        let needle = search.trim().to_lowercase();
        let mut activities = self
            .repo
            .list_activities()?
            .into_iter()
            .filter(|activity| activity.name.to_lowercase().contains(needle.as_str()))
            .collect::<Vec<_>>();
        activities.sort_by(|a, b| sort.compare(a, b));
        Ok(activities)
    }

    /// Validates and stores a new activity.
    pub fn add(&mut self, draft: ActivityDraft) -> RepoResult<(Activity, Notice)> {
        let activity = draft.into_activity()?;
        self.repo.create_activity(activity.clone())?;
        info!("event=activity_add module=activity status=ok");
        let notice = Notice::info(
            "Activity Added!",
            format!("{} has been added to your activities.", activity.name),
        );
        Ok((activity, notice))
    }

    pub fn delete(&mut self, id: &str) -> RepoResult<Notice> {
        self.repo.delete_activity(id)?;
        info!("event=activity_delete module=activity status=ok");
        Ok(Notice::info(
            "Activity Deleted",
            "The activity has been removed from your list.",
        ))
    }

    pub fn get(&self, id: &str) -> RepoResult<Option<Activity>> {
        self.repo.get_activity(id)
    }

    /// Records hours against an activity name.
    pub fn log_hours(&mut self, draft: HourLogDraft) -> RepoResult<(HourLog, Notice)> {
        let log = draft.into_log()?;
        let notice = Notice::info(
            "Hours Logged!",
            format!("{} hours logged for {}.", log.hours, log.activity_name),
        );
        self.hour_logs.push(log.clone());
        info!(
            "event=hours_logged module=activity status=ok entries={}",
            self.hour_logs.len()
        );
        Ok((log, notice))
    }

    pub fn hour_logs(&self) -> &[HourLog] {
        &self.hour_logs
    }

    /// Sum of logged hours for one activity name.
    pub fn logged_hours_for(&self, activity_name: &str) -> f64 {
        self.hour_logs
            .iter()
            .filter(|log| log.activity_name == activity_name)
            .map(|log| log.hours)
            .sum()
    }

    /// Names offered by the log-hours activity picker.
    pub fn activity_names(&self) -> RepoResult<Vec<String>> {
        Ok(self
            .repo
            .list_activities()?
            .into_iter()
            .map(|activity| activity.name)
            .collect())
    }
}

/// Notice for a failed form submission.
pub fn error_notice(err: &RepoError) -> Notice {
    match err {
        RepoError::Validation(_) => Notice::missing_information(),
        other => Notice::destructive("Something went wrong", other.to_string()),
    }
}
