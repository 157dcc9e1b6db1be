use tracing::info;

use super::AssignmentService;
use crate::errors::{EduPortalError, Result};
use crate::models::assignments::{
    entities::Assignment,
    requests::{CreateAssignmentRequest, NewAssignment},
};
use crate::models::users::entities::Principal;
use crate::utils::validate;

/// 创建作业
pub async fn create_assignment(
    service: &AssignmentService,
    principal: &Principal,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    // 课程必须存在，且操作者为授课教师或管理员
    service
        .access
        .ensure_course_manager(principal, req.course_id)
        .await?;

    let title = req
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| EduPortalError::validation("作业标题不能为空"))?;
    validate::validate_title(title).map_err(EduPortalError::validation)?;

    let description = req
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| EduPortalError::validation("作业描述不能为空"))?;
    validate::validate_description(description).map_err(EduPortalError::validation)?;

    let due_at = req
        .due_at
        .ok_or_else(|| EduPortalError::validation("作业截止时间不能为空"))?;
    let max_points = req
        .max_points
        .ok_or_else(|| EduPortalError::validation("作业满分不能为空"))?;
    validate::validate_max_points(max_points).map_err(EduPortalError::validation)?;

    // 截止时间必须严格晚于当前时间（仅创建时校验）
    let now = chrono::Utc::now();
    if due_at <= now {
        return Err(EduPortalError::validation(format!(
            "截止时间必须晚于当前时间: {due_at}"
        )));
    }

    let assignment = service
        .storage
        .create_assignment(
            principal.id,
            NewAssignment {
                course_id: req.course_id,
                title: title.to_string(),
                description: description.to_string(),
                due_at,
                max_points,
                allow_late_submission: req.allow_late.unwrap_or(true),
                attachments: req.attachments,
            },
        )
        .await?;

    info!(
        "作业已创建: id={} course_id={} title={}",
        assignment.id, assignment.course_id, assignment.title
    );
    Ok(assignment)
}
