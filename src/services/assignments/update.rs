use super::AssignmentService;
use crate::errors::{EduPortalError, Result};
use crate::models::assignments::{entities::Assignment, requests::UpdateAssignmentRequest};
use crate::models::users::entities::Principal;
use crate::utils::validate;

/// 更新作业（部分更新，仅提交的字段生效）
///
/// 注意：截止时间在更新时不做未来性校验，允许为更正而回拨；
/// 已存在提交的迟交标记不会随截止时间变更而重算。
pub async fn update_assignment(
    service: &AssignmentService,
    principal: &Principal,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
) -> Result<Assignment> {
    let assignment = service
        .storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("作业不存在: {assignment_id}")))?;

    service
        .access
        .ensure_course_manager(principal, assignment.course_id)
        .await?;

    let mut patch = req;
    if let Some(title) = patch.title.take() {
        let title = title.trim().to_string();
        validate::validate_title(&title).map_err(EduPortalError::validation)?;
        patch.title = Some(title);
    }
    if let Some(description) = patch.description.take() {
        let description = description.trim().to_string();
        validate::validate_description(&description).map_err(EduPortalError::validation)?;
        patch.description = Some(description);
    }
    if let Some(max_points) = patch.max_points {
        validate::validate_max_points(max_points).map_err(EduPortalError::validation)?;
    }

    service
        .storage
        .update_assignment(assignment_id, patch)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("作业不存在: {assignment_id}")))
}
