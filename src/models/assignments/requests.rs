use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::assignments::entities::Attachment;

/// 创建作业请求
///
/// 必填字段以 Option 接收，缺失在服务层报 Validation 错误而不是反序列化失败。
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub course_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_at: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub max_points: Option<f64>,
    pub allow_late: Option<bool>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// 更新作业请求（部分更新，仅提交的字段生效）
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_at: Option<DateTime<Utc>>, // ISO 8601 格式
    pub max_points: Option<f64>,
    pub allow_late: Option<bool>,
    pub attachments: Option<Vec<Attachment>>,
}

// 校验后的落库数据（服务层构造）
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub course_id: i64,
    pub title: String,
    pub description: String,
    pub due_at: DateTime<Utc>,
    pub max_points: f64,
    pub allow_late_submission: bool,
    pub attachments: Vec<Attachment>,
}

/// 作业列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentListQuery {
    pub course_id: i64,
    pub page: Option<i64>,
    pub size: Option<i64>,
}
