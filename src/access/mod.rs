//! 访问控制评估器
//!
//! 所有操作的授权判定集中在这里，角色用封闭枚举表达，不做角色字符串比较。
//! 约定：资源不存在报 NotFound，已认证但无权限报 Forbidden，
//! 仅提交链路的选课门槛报 NotEnrolled，三者对调用方可区分。

use std::sync::Arc;

use crate::errors::{EduPortalError, Result};
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::Principal;
use crate::storage::Storage;

#[derive(Clone)]
pub struct AccessEvaluator {
    storage: Arc<dyn Storage>,
}

impl AccessEvaluator {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 课程归属教师或管理员
    ///
    /// 作业增改删、评分、提交列表、成绩册都走这一条。
    pub async fn ensure_course_manager(&self, principal: &Principal, course_id: i64) -> Result<()> {
        // 课程不存在优先于权限判定，管理员也会拿到 NotFound
        let course = self
            .storage
            .get_course_by_id(course_id)
            .await?
            .ok_or_else(|| EduPortalError::not_found(format!("课程不存在: {course_id}")))?;
        if principal.is_admin() {
            return Ok(());
        }
        if principal.is_teacher() && course.teacher_id == principal.id {
            return Ok(());
        }
        Err(EduPortalError::forbidden(format!(
            "只有课程 {course_id} 的授课教师或管理员可以执行该操作"
        )))
    }

    /// 提交门槛：学生本人且已选课
    pub async fn ensure_enrolled_student(
        &self,
        principal: &Principal,
        course_id: i64,
    ) -> Result<()> {
        if !principal.is_student() {
            return Err(EduPortalError::forbidden("只有学生可以提交作业"));
        }
        if self
            .storage
            .is_student_enrolled(course_id, principal.id)
            .await?
        {
            Ok(())
        } else {
            Err(EduPortalError::not_enrolled(format!(
                "您未选修课程 {course_id}，不能提交该课程的作业"
            )))
        }
    }

    /// 课程内容读取：选课学生 / 授课教师 / 管理员
    pub async fn ensure_can_view_course(&self, principal: &Principal, course_id: i64) -> Result<()> {
        let course = self
            .storage
            .get_course_by_id(course_id)
            .await?
            .ok_or_else(|| EduPortalError::not_found(format!("课程不存在: {course_id}")))?;
        if principal.is_admin() {
            return Ok(());
        }
        if principal.is_teacher() && course.teacher_id == principal.id {
            return Ok(());
        }
        if principal.is_student()
            && self
                .storage
                .is_student_enrolled(course_id, principal.id)
                .await?
        {
            return Ok(());
        }
        Err(EduPortalError::forbidden(format!(
            "没有查看课程 {course_id} 内容的权限"
        )))
    }

    /// 单次提交读取：提交者本人 / 授课教师 / 管理员
    pub async fn ensure_can_view_submission(
        &self,
        principal: &Principal,
        submission: &Submission,
    ) -> Result<()> {
        if principal.is_admin() || submission.student_id == principal.id {
            return Ok(());
        }
        let assignment = self
            .storage
            .get_assignment_by_id(submission.assignment_id)
            .await?
            .ok_or_else(|| {
                EduPortalError::not_found(format!("作业不存在: {}", submission.assignment_id))
            })?;
        let course = self
            .storage
            .get_course_by_id(assignment.course_id)
            .await?
            .ok_or_else(|| {
                EduPortalError::not_found(format!("课程不存在: {}", assignment.course_id))
            })?;
        if principal.is_teacher() && course.teacher_id == principal.id {
            return Ok(());
        }
        Err(EduPortalError::forbidden(format!(
            "没有查看提交 {} 的权限",
            submission.id
        )))
    }

    /// 成绩单读取：学生本人 / 管理员 / 与该学生有共同课程的授课教师
    pub async fn ensure_can_view_student_grades(
        &self,
        principal: &Principal,
        student_id: i64,
    ) -> Result<()> {
        if principal.is_admin() || principal.id == student_id {
            return Ok(());
        }
        if principal.is_teacher() {
            let courses = self.storage.list_student_courses(student_id).await?;
            if courses.iter().any(|c| c.teacher_id == principal.id) {
                return Ok(());
            }
        }
        Err(EduPortalError::forbidden(format!(
            "没有查看学生 {student_id} 成绩的权限"
        )))
    }

    /// 附件下载授权
    ///
    /// 上传者本人可下载；被某作业引用时该课程的师生可下载；
    /// 被某次提交引用时提交者与该课程教师可下载；管理员不受限。
    pub async fn ensure_can_download_file(
        &self,
        principal: &Principal,
        file_id: &str,
    ) -> Result<()> {
        let file = self
            .storage
            .get_file_by_id(file_id)
            .await?
            .ok_or_else(|| EduPortalError::not_found(format!("文件不存在: {file_id}")))?;
        if principal.is_admin() || file.uploader_id == principal.id {
            return Ok(());
        }

        if let Some(assignment) = self.storage.find_assignment_by_attachment(file_id).await?
            && self
                .ensure_can_view_course(principal, assignment.course_id)
                .await
                .is_ok()
        {
            return Ok(());
        }

        if let Some(submission) = self.storage.find_submission_by_attachment(file_id).await?
            && self
                .ensure_can_view_submission(principal, &submission)
                .await
                .is_ok()
        {
            return Ok(());
        }

        Err(EduPortalError::forbidden(format!(
            "没有下载文件 {file_id} 的权限"
        )))
    }
}
