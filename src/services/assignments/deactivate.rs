use tracing::info;

use super::AssignmentService;
use crate::errors::{EduPortalError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentStatus};
use crate::models::users::entities::Principal;

/// 下架作业
///
/// 仅变更生命周期状态：列表中隐藏并拒绝新提交，既有提交与评分原样保留。
pub async fn deactivate_assignment(
    service: &AssignmentService,
    principal: &Principal,
    assignment_id: i64,
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

    let assignment = service
        .storage
        .set_assignment_status(assignment_id, AssignmentStatus::Deactivated)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("作业不存在: {assignment_id}")))?;

    info!(
        "作业已下架: id={} course_id={}",
        assignment.id, assignment.course_id
    );
    Ok(assignment)
}
