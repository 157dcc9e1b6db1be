use serde::Serialize;

use crate::models::PaginationInfo;
use crate::models::submissions::entities::Submission;

/// 提交结果
#[derive(Debug, Serialize)]
pub struct SubmitOutcome {
    pub submission: Submission,
    // false 表示首次提交，true 表示覆盖式重新提交
    pub resubmitted: bool,
}

/// 提交列表响应
#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub pagination: PaginationInfo,
}
