use serde::{Deserialize, Serialize};

/// Leave taken on a day, orthogonal to the work type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LeaveType {
    Paid,
    Absent,
    Special,
    Congratulation,
}

impl LeaveType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveType::Paid => "paid",
            LeaveType::Absent => "absent",
            LeaveType::Special => "special",
            LeaveType::Congratulation => "congratulation",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "paid" => Some(LeaveType::Paid),
            "absent" => Some(LeaveType::Absent),
            "special" => Some(LeaveType::Special),
            "congratulation" => Some(LeaveType::Congratulation),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        LeaveType::from_db_str(&code.to_lowercase())
    }

    /// Fixed display label; absent leave renders as the empty string upstream.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Paid => "有給休暇",
            LeaveType::Absent => "欠勤",
            LeaveType::Special => "特別休暇",
            LeaveType::Congratulation => "慶弔休暇",
        }
    }
}
