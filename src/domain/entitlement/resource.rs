//! Metered resource types and their counting windows.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// A metered action subject to entitlement checks.
///
/// Every usage event carries one of these explicitly; the resource type is
/// set once when the event is recorded and never inferred from other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Creating a personal tutor.
    Tutor,
    /// Starting an interview session.
    Interview,
    /// Starting a story practice session.
    Story,
}

/// The time span over which consumed usage is aggregated for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageWindow {
    /// All events ever recorded count. Used for standing caps on owned
    /// resources rather than monthly rates.
    AllTime,
    /// Only events in the current UTC calendar month count.
    CalendarMonth,
}

impl ResourceType {
    /// Stable lowercase name, matching the datastore column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Tutor => "tutor",
            ResourceType::Interview => "interview",
            ResourceType::Story => "story",
        }
    }

    /// The counting window for this resource.
    ///
    /// Tutor allotment is a standing cap on total owned tutors; sessions
    /// are metered per calendar month.
    pub fn window(&self) -> UsageWindow {
        match self {
            ResourceType::Tutor => UsageWindow::AllTime,
            ResourceType::Interview | ResourceType::Story => UsageWindow::CalendarMonth,
        }
    }

    /// The start of this resource's counting window as of `now`.
    pub fn window_start(&self, now: Timestamp) -> Timestamp {
        match self.window() {
            UsageWindow::AllTime => Timestamp::epoch(),
            UsageWindow::CalendarMonth => now.start_of_month(),
        }
    }

    /// Whether the interview credit ledger folds into this resource's
    /// allotment. Credits are interview-only.
    pub fn accepts_credits(&self) -> bool {
        matches!(self, ResourceType::Interview)
    }

    /// Human-readable name for denial messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceType::Tutor => "tutors",
            ResourceType::Interview => "interview sessions",
            ResourceType::Story => "story sessions",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
