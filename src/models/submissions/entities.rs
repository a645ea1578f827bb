use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 提交状态，不限制状态之间的转换
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    Checked,
    Reassigned,
    Rejected,
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "submitted";
    pub const CHECKED: &'static str = "checked";
    pub const REASSIGNED: &'static str = "reassigned";
    pub const REJECTED: &'static str = "rejected";

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => Self::SUBMITTED,
            SubmissionStatus::Checked => Self::CHECKED,
            SubmissionStatus::Reassigned => Self::REASSIGNED,
            SubmissionStatus::Rejected => Self::REJECTED,
        }
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<SubmissionStatus>()
            .map_err(|_| serde::de::Error::custom(format!("\"{s}\" is not a valid choice.")))
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::SUBMITTED => Ok(SubmissionStatus::Submitted),
            Self::CHECKED => Ok(SubmissionStatus::Checked),
            Self::REASSIGNED => Ok(SubmissionStatus::Reassigned),
            Self::REJECTED => Ok(SubmissionStatus::Rejected),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: i64,
    pub student_id: i64,
    pub assignment_id: i64,
    pub question_id: i64,
    pub code: String,
    pub status: SubmissionStatus,
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 教师反馈，与 Submission.feedback 相互独立
#[derive(Debug, Clone, Serialize)]
pub struct TeacherFeedback {
    pub id: i64,
    #[serde(rename = "submission")]
    pub submission_id: i64,
    #[serde(rename = "teacher")]
    pub teacher_id: i64,
    pub feedback: String,
    pub resubmission_requested: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        for label in ["submitted", "checked", "reassigned", "rejected"] {
            let status = label.parse::<SubmissionStatus>().unwrap();
            assert_eq!(status.as_str(), label);
        }
        assert!("graded".parse::<SubmissionStatus>().is_err());
        assert!("Checked".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&SubmissionStatus::Reassigned).unwrap();
        assert_eq!(json, "\"reassigned\"");
        assert!(serde_json::from_str::<SubmissionStatus>("\"pending\"").is_err());
    }

    #[test]
    fn test_feedback_field_names() {
        let feedback = TeacherFeedback {
            id: 1,
            submission_id: 2,
            teacher_id: 3,
            feedback: "Looks good".into(),
            resubmission_requested: false,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&feedback).unwrap();
        assert_eq!(value["submission"], 2);
        assert_eq!(value["teacher"], 3);
    }
}
