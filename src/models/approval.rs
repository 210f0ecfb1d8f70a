use serde::{Deserialize, Serialize};

/// Status of the per-(user, year, month) approval workflow.
/// A missing approval row is equivalent to `Draft`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ApprovalStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Draft => "draft",
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(ApprovalStatus::Draft),
            "pending" => Some(ApprovalStatus::Pending),
            "approved" => Some(ApprovalStatus::Approved),
            "rejected" => Some(ApprovalStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Draft => "未申請",
            ApprovalStatus::Pending => "承認待ち",
            ApprovalStatus::Approved => "承認済み",
            ApprovalStatus::Rejected => "却下",
        }
    }
}

/// Approval workflow row for one (user, year, month).
///
/// Timestamps are stored as ISO 8601 strings, matching the TEXT columns
/// they map to.
#[derive(Debug, Clone, Serialize)]
pub struct Approval {
    pub user: String,
    pub year: i32,
    pub month: u32,
    pub status: ApprovalStatus,
    pub requested_at: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<String>,
    pub rejection_reason: Option<String>,
}

impl Approval {
    /// Fresh draft-state row for a month with no workflow history.
    pub fn draft(user: &str, year: i32, month: u32) -> Self {
        Self {
            user: user.to_string(),
            year,
            month,
            status: ApprovalStatus::Draft,
            requested_at: None,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.status != ApprovalStatus::Approved
    }
}
