use chrono::{DateTime, Utc};
use serde::Serialize;

/// 评分结果及派生字段
#[derive(Debug, Clone, Serialize)]
pub struct GradeOutcome {
    pub submission_id: i64,
    pub score: f64,
    pub feedback: String,
    // score / max_points * 100，保留两位小数
    pub percentage: f64,
    pub letter_grade: String,
    pub graded_at: DateTime<Utc>,
    pub graded_by: i64,
    // 已评分的提交被改成不同分数时为 true
    pub is_regrade: bool,
    // 仅在 is_regrade 时携带原分数
    pub previous_score: Option<f64>,
}

/// 批量评分中单条失败的结构化记录
#[derive(Debug, Clone, Serialize)]
pub struct BulkGradeFailure {
    pub submission_id: Option<i64>,
    // 稳定的机器可读错误代码（同 EduPortalError::code）
    pub code: String,
    pub reason: String,
}

/// 批量评分结果
///
/// 成功与失败按条目划分，已成功的条目不因后续失败回滚。
#[derive(Debug, Serialize)]
pub struct BulkGradeResponse {
    pub successful: Vec<GradeOutcome>,
    pub failed: Vec<BulkGradeFailure>,
    pub total_processed: i64,
}
