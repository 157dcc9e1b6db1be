//! 作业存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::{AssignmentListQuery, NewAssignment, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
};

impl MemoryStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: NewAssignment,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now();
        let assignment = Assignment {
            id: self.alloc_id(),
            course_id: req.course_id,
            title: req.title,
            description: req.description,
            due_at: req.due_at,
            max_points: req.max_points,
            attachments: req.attachments,
            allow_late_submission: req.allow_late_submission,
            status: AssignmentStatus::Active,
            created_by,
            created_at: now,
            updated_at: now,
        };
        self.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        Ok(self
            .assignments
            .get(&assignment_id)
            .map(|a| a.value().clone()))
    }

    /// 部分更新作业，仅提交的字段生效
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let Some(mut assignment) = self.assignments.get_mut(&assignment_id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            assignment.title = title;
        }
        if let Some(description) = update.description {
            assignment.description = description;
        }
        if let Some(due_at) = update.due_at {
            assignment.due_at = due_at;
        }
        if let Some(max_points) = update.max_points {
            assignment.max_points = max_points;
        }
        if let Some(allow_late) = update.allow_late {
            assignment.allow_late_submission = allow_late;
        }
        if let Some(attachments) = update.attachments {
            assignment.attachments = attachments;
        }
        assignment.updated_at = chrono::Utc::now();

        Ok(Some(assignment.value().clone()))
    }

    /// 变更作业生命周期状态
    pub async fn set_assignment_status_impl(
        &self,
        assignment_id: i64,
        status: AssignmentStatus,
    ) -> Result<Option<Assignment>> {
        let Some(mut assignment) = self.assignments.get_mut(&assignment_id) else {
            return Ok(None);
        };
        assignment.status = status;
        assignment.updated_at = chrono::Utc::now();
        Ok(Some(assignment.value().clone()))
    }

    /// 课程下的作业
    pub async fn list_assignments_by_course_impl(
        &self,
        course_id: i64,
        include_deactivated: bool,
    ) -> Result<Vec<Assignment>> {
        let mut assignments: Vec<Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .filter(|a| include_deactivated || a.status == AssignmentStatus::Active)
            .map(|a| a.value().clone())
            .collect();
        // 按截止时间升序，同时间按 ID 保证稳定
        assignments.sort_by(|a, b| a.due_at.cmp(&b.due_at).then(a.id.cmp(&b.id)));
        Ok(assignments)
    }

    /// 列出作业（分页）
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
        include_deactivated: bool,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1);
        let size = query.size.unwrap_or(10).clamp(1, 100);

        let all = self
            .list_assignments_by_course_impl(query.course_id, include_deactivated)
            .await?;

        let total = all.len() as i64;
        let total_pages = (total as u64).div_ceil(size as u64) as i64;
        let items = all
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page,
                page_size: size,
                total,
                total_pages,
            },
        })
    }
}
