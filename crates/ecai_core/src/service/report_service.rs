//! Reporting a problematic opportunity.
//!
//! # Invariants
//! - A reason is required; the description is optional.
//! - The description is only kept for reasons that ask for one.

use crate::model::card::{CardId, Opportunity};
use crate::service::notice::Notice;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why an opportunity is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    Scam,
    Inaccurate,
    Other,
}

impl ReportReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scam => "scam",
            Self::Inaccurate => "inaccurate",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Scam => "Scam",
            Self::Inaccurate => "Inaccurate info",
            Self::Other => "Other",
        }
    }

    /// Whether the form shows the free-text description box.
    pub fn wants_description(self) -> bool {
        matches!(self, Self::Inaccurate | Self::Other)
    }

    pub fn parse(value: &str) -> Result<Self, ReportError> {
        match value.trim() {
            "" => Err(ReportError::MissingReason),
            "scam" => Ok(Self::Scam),
            "inaccurate" => Ok(Self::Inaccurate),
            "other" => Ok(Self::Other),
            other => Err(ReportError::UnknownReason(other.to_string())),
        }
    }
}

/// Report submission errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    MissingReason,
    UnknownReason(String),
    UnknownCard(CardId),
}

impl ReportError {
    /// Notice shown when the submission is rejected.
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingReason | Self::UnknownReason(_) => Notice::destructive(
                "Please select a reason",
                "You must select a reason for reporting.",
            ),
            Self::UnknownCard(_) => Notice::destructive(
                "Report Failed",
                "This opportunity is no longer available.",
            ),
        }
    }
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingReason => write!(f, "report reason is required"),
            Self::UnknownReason(value) => write!(f, "unsupported report reason: {value}"),
            Self::UnknownCard(id) => write!(f, "reported card not found: {id}"),
        }
    }
}

impl Error for ReportError {}

/// Accepted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityReport {
    pub card_id: CardId,
    pub reason: ReportReason,
    pub description: Option<String>,
}

/// Builds a report for `opportunity` and the notice confirming it.
pub fn submit_report(
    opportunity: &Opportunity,
    reason: Option<ReportReason>,
    description: &str,
) -> Result<(OpportunityReport, Notice), ReportError> {
    let reason = reason.ok_or(ReportError::MissingReason)?;
    let description = Some(description.trim())
        .filter(|value| reason.wants_description() && !value.is_empty())
        .map(str::to_string);

    info!(
        "event=report_submit module=report status=ok reason={} has_description={}",
        reason.as_str(),
        description.is_some()
    );
    let notice = Notice::info(
        "Report Submitted",
        format!(
            "Thank you for reporting {}. We'll review it soon.",
            opportunity.title
        ),
    );
    Ok((
        OpportunityReport {
            card_id: opportunity.id.clone(),
            reason,
            description,
        },
        notice,
    ))
}

#[cfg(test)]
mod tests {
    use super::{submit_report, ReportError, ReportReason};
    use crate::fixtures::swipe_opportunities;

    #[test]
    fn parse_accepts_known_reasons_only() {
        assert_eq!(ReportReason::parse("scam").unwrap(), ReportReason::Scam);
        assert_eq!(
            ReportReason::parse(" ").unwrap_err(),
            ReportError::MissingReason
        );
        assert_eq!(
            ReportReason::parse("spam").unwrap_err(),
            ReportError::UnknownReason("spam".to_string())
        );
    }

    #[test]
    fn missing_reason_is_rejected() {
        let opportunity = &swipe_opportunities()[0];
        let err = submit_report(opportunity, None, "details").unwrap_err();
        assert_eq!(err, ReportError::MissingReason);
        assert_eq!(err.notice().title, "Please select a reason");
    }

    #[test]
    fn description_is_dropped_for_scam_reports() {
        let opportunity = &swipe_opportunities()[0];
        let (report, notice) =
            submit_report(opportunity, Some(ReportReason::Scam), "fake org").unwrap();
        assert_eq!(report.description, None);
        assert!(notice.description.contains(opportunity.title.as_str()));

        let (report, _) =
            submit_report(opportunity, Some(ReportReason::Inaccurate), " wrong date ").unwrap();
        assert_eq!(report.description.as_deref(), Some("wrong date"));
    }
}
