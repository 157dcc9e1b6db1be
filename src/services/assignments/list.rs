use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::{
    requests::AssignmentListQuery, responses::AssignmentListResponse,
};
use crate::models::users::entities::Principal;

/// 列出课程作业
///
/// 学生只看到活跃作业，授课教师与管理员连同已下架的一并返回。
pub async fn list_assignments(
    service: &AssignmentService,
    principal: &Principal,
    query: AssignmentListQuery,
) -> Result<AssignmentListResponse> {
    service
        .access
        .ensure_can_view_course(principal, query.course_id)
        .await?;

    let include_deactivated = !principal.is_student();
    service
        .storage
        .list_assignments_with_pagination(query, include_deactivated)
        .await
}
