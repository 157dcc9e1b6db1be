use super::SubmissionService;
use crate::errors::{EduPortalError, Result};
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::Principal;

/// 获取提交详情
pub async fn get_submission(
    service: &SubmissionService,
    principal: &Principal,
    submission_id: i64,
) -> Result<Submission> {
    let submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("提交不存在: {submission_id}")))?;

    service
        .access
        .ensure_can_view_submission(principal, &submission)
        .await?;

    Ok(submission)
}
