use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::Attachment;

/// 提交实体
///
/// 每个 (作业, 学生) 对至多一条记录，重新提交就地覆盖并清空评分字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    // 提交正文，有附件时可为空
    pub content: Option<String>,
    pub attachments: Vec<Attachment>,
    // 第几次提交（覆盖式重交时递增）
    pub attempt: i32,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 迟交标记，按提交那一刻生效的截止时间判定
    pub is_late: bool,
    // 评分字段，未评分时为 None
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    pub graded_by: Option<i64>,
}

impl Submission {
    pub fn is_graded(&self) -> bool {
        self.score.is_some()
    }
}
