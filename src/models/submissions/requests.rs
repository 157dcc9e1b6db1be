use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::assignments::entities::Attachment;

/// 提交作业请求
#[derive(Debug, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

// 校验后的落库数据（服务层构造，评分字段由存储层清空）
#[derive(Debug, Clone)]
pub struct SubmissionWrite {
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: Option<String>,
    pub attachments: Vec<Attachment>,
    pub submitted_at: DateTime<Utc>,
    pub is_late: bool,
}

/// 提交列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionListQuery {
    pub assignment_id: i64,
    pub student_id: Option<i64>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}
