use serde::{Deserialize, Serialize};

// 作业生命周期状态
//
// 软删除是显式状态而不是布尔标记，历史提交仍可引用已下架的作业。
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Active,      // 进行中
    Deactivated, // 已下架
}

impl AssignmentStatus {
    pub const ACTIVE: &'static str = "active";
    pub const DEACTIVATED: &'static str = "deactivated";
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AssignmentStatus::ACTIVE => Ok(AssignmentStatus::Active),
            AssignmentStatus::DEACTIVATED => Ok(AssignmentStatus::Deactivated),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作业状态: '{s}'. 支持的状态: active, deactivated"
            ))),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Active => write!(f, "{}", AssignmentStatus::ACTIVE),
            AssignmentStatus::Deactivated => write!(f, "{}", AssignmentStatus::DEACTIVATED),
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AssignmentStatus::Active),
            "deactivated" => Ok(AssignmentStatus::Deactivated),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

/// 附件引用（文件名 + 文件库令牌）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    pub name: String,
    pub file_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 关联的课程 ID
    pub course_id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 作业截止时间
    pub due_at: chrono::DateTime<chrono::Utc>,
    // 作业满分
    pub max_points: f64,
    // 作业附件
    pub attachments: Vec<Attachment>,
    // 是否允许迟交
    pub allow_late_submission: bool,
    // 生命周期状态
    pub status: AssignmentStatus,
    // 创建者 ID
    pub created_by: i64,
    // 作业创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 作业更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    /// 此刻是否仍接受提交
    ///
    /// 已下架的作业无条件拒绝；截止后仅在允许迟交时接受，迟交标记由提交流程记录。
    pub fn accepts_submissions(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        if self.status != AssignmentStatus::Active {
            return false;
        }
        now <= self.due_at || self.allow_late_submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn assignment(status: AssignmentStatus, allow_late: bool) -> Assignment {
        let now = Utc::now();
        Assignment {
            id: 1,
            course_id: 1,
            title: "期末大作业".to_string(),
            description: "实现一个最小的键值存储。".to_string(),
            due_at: now + Duration::hours(1),
            max_points: 100.0,
            attachments: vec![],
            allow_late_submission: allow_late,
            status,
            created_by: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_deactivated_never_accepts() {
        let a = assignment(AssignmentStatus::Deactivated, true);
        assert!(!a.accepts_submissions(a.due_at - Duration::seconds(1)));
        assert!(!a.accepts_submissions(a.due_at + Duration::seconds(1)));
    }

    #[test]
    fn test_accepts_until_deadline_inclusive() {
        let a = assignment(AssignmentStatus::Active, false);
        assert!(a.accepts_submissions(a.due_at - Duration::seconds(1)));
        assert!(a.accepts_submissions(a.due_at));
        assert!(!a.accepts_submissions(a.due_at + Duration::seconds(1)));
    }

    #[test]
    fn test_late_submission_window() {
        let a = assignment(AssignmentStatus::Active, true);
        assert!(a.accepts_submissions(a.due_at + Duration::days(3)));
    }
}
