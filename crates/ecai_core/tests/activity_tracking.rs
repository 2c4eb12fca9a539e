use ecai_core::fixtures::tracked_activities;
use ecai_core::service::activity_service::error_notice;
use ecai_core::{
    ActivityDraft, ActivityService, ActivitySort, ActivityValidationError, HourLogDraft,
    InMemoryActivityRepository, RepoError,
};

fn service() -> ActivityService<InMemoryActivityRepository> {
    let repo = InMemoryActivityRepository::with_activities(tracked_activities()).unwrap();
    ActivityService::new(repo)
}

fn names(
    service: &ActivityService<InMemoryActivityRepository>,
    search: &str,
    sort: ActivitySort,
) -> Vec<String> {
    service
        .list(search, sort)
        .unwrap()
        .into_iter()
        .map(|activity| activity.name)
        .collect()
}

#[test]
fn sorts_by_name_type_and_hours() {
    let service = service();
    assert_eq!(
        names(&service, "", ActivitySort::Alphabetical),
        vec![
            "Future Business Leaders of America (FBLA)",
            "High School Basketball Team",
            "National Honor Society",
        ]
    );
    assert_eq!(
        names(&service, "", ActivitySort::CareerField),
        vec![
            "National Honor Society",
            "High School Basketball Team",
            "Future Business Leaders of America (FBLA)",
        ]
    );
    assert_eq!(
        names(&service, "", ActivitySort::Hours),
        vec![
            "High School Basketball Team",
            "Future Business Leaders of America (FBLA)",
            "National Honor Society",
        ]
    );
}

#[test]
fn search_filters_by_name_ignoring_case() {
    let service = service();
    assert_eq!(
        names(&service, "HONOR", ActivitySort::Alphabetical),
        vec!["National Honor Society"]
    );
    assert!(names(&service, "chess", ActivitySort::Alphabetical).is_empty());
}

#[test]
fn sort_values_parse_from_select_options() {
    assert_eq!(ActivitySort::parse("career-field"), Some(ActivitySort::CareerField));
    assert_eq!(ActivitySort::parse("hours"), Some(ActivitySort::Hours));
    assert_eq!(ActivitySort::parse("newest"), None);
}

#[test]
fn add_validates_presence_and_stores_activity() {
    let mut service = service();
    let err = service
        .add(ActivityDraft {
            name: "Debate Team".to_string(),
            ..ActivityDraft::default()
        })
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ActivityValidationError::MissingField("type"))
    );
    assert_eq!(error_notice(&err).title, "Missing Information");

    let (activity, notice) = service
        .add(ActivityDraft {
            name: "Debate Team".to_string(),
            kind: "Academic".to_string(),
            hours_per_week: "5".to_string(),
            weeks_per_year: "30".to_string(),
            grade_levels: vec!["11".to_string()],
            ..ActivityDraft::default()
        })
        .unwrap();
    assert_eq!(notice.title, "Activity Added!");
    assert_eq!(service.get(&activity.id).unwrap(), Some(activity));
    assert_eq!(service.list("", ActivitySort::Alphabetical).unwrap().len(), 4);
}

#[test]
fn delete_removes_activity_once() {
    let mut service = service();
    assert_eq!(service.delete("3").unwrap().title, "Activity Deleted");
    assert_eq!(
        service.delete("3").unwrap_err(),
        RepoError::NotFound("3".to_string())
    );
}

#[test]
fn logged_hours_accumulate_per_activity() {
    let mut service = service();
    let name = "National Honor Society".to_string();
    for hours in ["2", "1.5"] {
        let (_, notice) = service
            .log_hours(HourLogDraft {
                activity_name: name.clone(),
                date: "2026-10-18".to_string(),
                hours: hours.to_string(),
                milestone: String::new(),
            })
            .unwrap();
        assert_eq!(notice.title, "Hours Logged!");
    }
    assert_eq!(service.logged_hours_for(&name), 3.5);
    assert_eq!(service.hour_logs().len(), 2);

    let err = service
        .log_hours(HourLogDraft {
            activity_name: name,
            ..HourLogDraft::default()
        })
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ActivityValidationError::MissingField("date"))
    );
}
