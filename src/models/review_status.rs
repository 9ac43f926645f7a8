//! Urgency tier and display label of a problem relative to "now".
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Normal,
    Soon,
    DueToday,
    DueYesterday,
    Overdue,
}

impl Severity {
    /// Urgent tiers are rendered bold and red.
    pub fn is_urgent(&self) -> bool {
        matches!(
            self,
            Severity::DueToday | Severity::DueYesterday | Severity::Overdue
        )
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::DueToday | Severity::DueYesterday | Severity::Overdue => "#ff375f",
            Severity::Soon => "#ffc01e",
            Severity::Normal => "#8b949e",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReviewStatus {
    pub severity: Severity,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdue_days: Option<i64>,
}

impl ReviewStatus {
    pub fn new(severity: Severity, label: impl Into<String>) -> Self {
        Self {
            severity,
            label: label.into(),
            overdue_days: None,
        }
    }

    pub fn overdue(days: i64) -> Self {
        Self {
            severity: Severity::Overdue,
            label: format!("Overdue ({}d)", days),
            overdue_days: Some(days),
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.severity.is_urgent()
    }
}
