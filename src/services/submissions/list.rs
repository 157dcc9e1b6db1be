use super::SubmissionService;
use crate::errors::{EduPortalError, Result};
use crate::models::submissions::{
    requests::SubmissionListQuery, responses::SubmissionListResponse,
};
use crate::models::users::entities::Principal;

/// 列出某作业的提交
///
/// 授课教师与管理员可以看全部，学生只能看自己的那一条。
pub async fn list_submissions(
    service: &SubmissionService,
    principal: &Principal,
    query: SubmissionListQuery,
) -> Result<SubmissionListResponse> {
    let assignment = service
        .storage
        .get_assignment_by_id(query.assignment_id)
        .await?
        .ok_or_else(|| {
            EduPortalError::not_found(format!("作业不存在: {}", query.assignment_id))
        })?;

    let mut query = query;
    if principal.is_student() {
        service
            .access
            .ensure_can_view_course(principal, assignment.course_id)
            .await?;
        query.student_id = Some(principal.id);
    } else {
        service
            .access
            .ensure_course_manager(principal, assignment.course_id)
            .await?;
    }

    service.storage.list_submissions_with_pagination(query).await
}
