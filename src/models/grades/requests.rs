use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 单条评分请求
#[derive(Debug, Deserialize)]
pub struct GradeSubmissionRequest {
    pub score: Option<f64>,
    pub feedback: Option<String>,
}

/// 批量评分条目
///
/// 字段缺失不会使整批反序列化失败，逐条在处理时报告。
#[derive(Debug, Clone, Deserialize)]
pub struct BulkGradeEntry {
    pub submission_id: Option<i64>,
    pub score: Option<f64>,
    pub feedback: Option<String>,
}

/// 批量评分请求
#[derive(Debug, Deserialize)]
pub struct BulkGradeRequest {
    pub entries: Vec<BulkGradeEntry>,
}

// 校验后的落库数据（服务层构造）
#[derive(Debug, Clone)]
pub struct GradeWrite {
    pub score: f64,
    pub feedback: String,
    pub graded_at: DateTime<Utc>,
    pub graded_by: i64,
}
