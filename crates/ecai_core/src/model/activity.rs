//! Tracked activity and hour-log model.
//!
//! # Responsibility
//! - Define activities a student reports on applications.
//! - Turn raw form drafts into validated records.
//!
//! # Invariants
//! - Validation is presence-only: required fields must be non-blank and
//!   numeric fields must parse. No range or format checks beyond that.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a tracked activity.
pub type ActivityId = String;

/// Activity types offered by the add-activity form.
pub const ACTIVITY_TYPES: &[&str] = &[
    "Academic",
    "Arts",
    "Athletics-Jv-Varsity",
    "Business",
    "Environmental",
    "Government",
    "Media",
    "Science/Math",
    "Service/Volunteer",
    "Other",
];

/// Grade levels offered by the add-activity form.
pub const GRADE_LEVELS: &[&str] = &["Pre-9", "9", "10", "11", "12", "Post-12"];

/// One extracurricular activity on the student's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    /// Serialized as `type` to match the form field naming.
    #[serde(rename = "type")]
    pub kind: String,
    pub grades: Vec<String>,
    pub hours_per_week: f64,
    pub weeks_per_year: u32,
    pub roles: String,
    pub description: String,
}

impl Activity {
    /// Hours per year as reported on applications.
    pub fn total_hours(&self) -> f64 {
        self.hours_per_week * f64::from(self.weeks_per_year)
    }
}

/// Raw add-activity form input. Numeric fields arrive as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDraft {
    pub name: String,
    pub kind: String,
    pub hours_per_week: String,
    pub weeks_per_year: String,
    pub roles: String,
    pub grade_levels: Vec<String>,
    pub description: String,
}

impl ActivityDraft {
    /// Toggles one grade checkbox, keeping selection order.
    pub fn set_grade(&mut self, grade: &str, checked: bool) {
        let present = self.grade_levels.iter().any(|value| value == grade);
        if checked && !present {
            self.grade_levels.push(grade.to_string());
        } else if !checked {
            self.grade_levels.retain(|value| value != grade);
        }
    }

    /// Validates presence of required fields and builds an activity with a
    /// generated id.
    pub fn into_activity(self) -> Result<Activity, ActivityValidationError> {
        let name = required(self.name, "name")?;
        let kind = required(self.kind, "type")?;
        let hours_raw = required(self.hours_per_week, "hoursPerWeek")?;
        let weeks_raw = required(self.weeks_per_year, "weeksPerYear")?;

        let hours_per_week = hours_raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ActivityValidationError::NotANumber {
                field: "hoursPerWeek",
                value: hours_raw.clone(),
            })?;
        let weeks_per_year =
            weeks_raw
                .parse::<u32>()
                .map_err(|_| ActivityValidationError::NotANumber {
                    field: "weeksPerYear",
                    value: weeks_raw,
                })?;

        Ok(Activity {
            id: Uuid::new_v4().to_string(),
            name,
            kind,
            grades: self.grade_levels,
            hours_per_week,
            weeks_per_year,
            roles: self.roles.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// Activity form validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityValidationError {
    MissingField(&'static str),
    NotANumber { field: &'static str, value: String },
}

impl Display for ActivityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::NotANumber { field, value } => {
                write!(f, "field `{field}` must be a number, got `{value}`")
            }
        }
    }
}

impl Error for ActivityValidationError {}

/// Raw log-hours form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourLogDraft {
    pub activity_name: String,
    /// `YYYY-MM-DD` as produced by the date picker; not re-validated here.
    pub date: String,
    pub hours: String,
    pub milestone: String,
}

/// Hours logged against one activity on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourLog {
    pub activity_name: String,
    pub date: String,
    pub hours: f64,
    pub milestone: Option<String>,
}

impl HourLogDraft {
    pub fn into_log(self) -> Result<HourLog, ActivityValidationError> {
        let activity_name = required(self.activity_name, "activityName")?;
        let date = required(self.date, "date")?;
        let hours_raw = required(self.hours, "hours")?;
        let hours = hours_raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ActivityValidationError::NotANumber {
                field: "hours",
                value: hours_raw.clone(),
            })?;
        let milestone = Some(self.milestone.trim().to_string()).filter(|value| !value.is_empty());

        Ok(HourLog {
            activity_name,
            date,
            hours,
            milestone,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, ActivityValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ActivityValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{ActivityDraft, ActivityValidationError, HourLogDraft};

    fn filled_draft() -> ActivityDraft {
        ActivityDraft {
            name: " Robotics Club ".to_string(),
            kind: "Science/Math".to_string(),
            hours_per_week: "4".to_string(),
            weeks_per_year: "30".to_string(),
            ..ActivityDraft::default()
        }
    }

    #[test]
    fn draft_requires_name_type_and_numbers() {
        let mut draft = filled_draft();
        draft.kind = "  ".to_string();
        assert_eq!(
            draft.into_activity().expect_err("missing type must fail"),
            ActivityValidationError::MissingField("type")
        );

        let mut draft = filled_draft();
        draft.weeks_per_year = "many".to_string();
        assert!(matches!(
            draft.into_activity(),
            Err(ActivityValidationError::NotANumber {
                field: "weeksPerYear",
                ..
            })
        ));
    }

    #[test]
    fn draft_builds_trimmed_activity_with_generated_id() {
        let activity = filled_draft().into_activity().expect("valid draft");
        assert!(!activity.id.is_empty());
        assert_eq!(activity.name, "Robotics Club");
        assert_eq!(activity.total_hours(), 120.0);
    }

    #[test]
    fn grade_toggle_keeps_order_and_ignores_duplicates() {
        let mut draft = ActivityDraft::default();
        draft.set_grade("10", true);
        draft.set_grade("9", true);
        draft.set_grade("10", true);
        assert_eq!(draft.grade_levels, vec!["10", "9"]);

        draft.set_grade("10", false);
        assert_eq!(draft.grade_levels, vec!["9"]);
    }

    #[test]
    fn hour_log_milestone_is_optional() {
        let log = HourLogDraft {
            activity_name: "National Honor Society".to_string(),
            date: "2026-10-18".to_string(),
            hours: "2.5".to_string(),
            milestone: "   ".to_string(),
        }
        .into_log()
        .expect("valid log");
        assert_eq!(log.hours, 2.5);
        assert_eq!(log.milestone, None);

        let err = HourLogDraft::default()
            .into_log()
            .expect_err("empty draft must fail");
        assert_eq!(err, ActivityValidationError::MissingField("activityName"));
    }
}
