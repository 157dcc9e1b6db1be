//! 内存存储实现
//!
//! 面向单进程部署与测试的参考后端。每个领域一个并发映射；
//! (作业, 学生) 的提交唯一性由提交映射的键结构保证。

mod assignments;
mod courses;
mod files;
mod submissions;
mod users;

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use tracing::info;

use crate::models::{
    assignments::entities::Assignment,
    courses::entities::{Course, Enrollment},
    files::entities::File,
    submissions::entities::Submission,
    users::entities::User,
};

/// 内存存储实现
pub struct MemoryStorage {
    next_id: AtomicI64,
    pub(crate) users: DashMap<i64, User>,
    pub(crate) courses: DashMap<i64, Course>,
    // 键: (course_id, student_id)
    pub(crate) enrollments: DashMap<(i64, i64), Enrollment>,
    pub(crate) assignments: DashMap<i64, Assignment>,
    // 键: (assignment_id, student_id)，每对至多一条提交
    pub(crate) submissions: DashMap<(i64, i64), Submission>,
    // 提交 ID 到键的索引
    pub(crate) submission_ids: DashMap<i64, (i64, i64)>,
    // 键: 下载令牌
    pub(crate) files: DashMap<String, File>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        info!("内存存储初始化完成");
        Self {
            next_id: AtomicI64::new(1),
            users: DashMap::new(),
            courses: DashMap::new(),
            enrollments: DashMap::new(),
            assignments: DashMap::new(),
            submissions: DashMap::new(),
            submission_ids: DashMap::new(),
            files: DashMap::new(),
        }
    }

    pub(crate) fn alloc_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

// Storage trait 实现
use crate::errors::Result;
use crate::models::{
    assignments::{
        entities::AssignmentStatus,
        requests::{AssignmentListQuery, NewAssignment, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    courses::requests::CreateCourseRequest,
    grades::requests::GradeWrite,
    submissions::{
        requests::{SubmissionListQuery, SubmissionWrite},
        responses::SubmissionListResponse,
    },
    users::requests::CreateUserRequest,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for MemoryStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn enroll_student(&self, course_id: i64, student_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(course_id, student_id).await
    }

    async fn is_student_enrolled(&self, course_id: i64, student_id: i64) -> Result<bool> {
        self.is_student_enrolled_impl(course_id, student_id).await
    }

    async fn list_enrolled_students(&self, course_id: i64) -> Result<Vec<User>> {
        self.list_enrolled_students_impl(course_id).await
    }

    async fn list_student_courses(&self, student_id: i64) -> Result<Vec<Course>> {
        self.list_student_courses_impl(student_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: NewAssignment,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn set_assignment_status(
        &self,
        assignment_id: i64,
        status: AssignmentStatus,
    ) -> Result<Option<Assignment>> {
        self.set_assignment_status_impl(assignment_id, status).await
    }

    async fn list_assignments_by_course(
        &self,
        course_id: i64,
        include_deactivated: bool,
    ) -> Result<Vec<Assignment>> {
        self.list_assignments_by_course_impl(course_id, include_deactivated)
            .await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        include_deactivated: bool,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query, include_deactivated)
            .await
    }

    // 提交模块
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn get_submission_by_pair(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_pair_impl(assignment_id, student_id)
            .await
    }

    async fn upsert_submission(&self, record: SubmissionWrite) -> Result<(Submission, bool)> {
        self.upsert_submission_impl(record).await
    }

    async fn apply_grade(
        &self,
        submission_id: i64,
        grade: GradeWrite,
    ) -> Result<Option<Submission>> {
        self.apply_grade_impl(submission_id, grade).await
    }

    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id)
            .await
    }

    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_student_impl(student_id).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    // 文件模块
    async fn register_file(&self, file_name: &str, uploader_id: i64) -> Result<File> {
        self.register_file_impl(file_name, uploader_id).await
    }

    async fn get_file_by_id(&self, file_id: &str) -> Result<Option<File>> {
        self.get_file_by_id_impl(file_id).await
    }

    async fn find_assignment_by_attachment(&self, file_id: &str) -> Result<Option<Assignment>> {
        self.find_assignment_by_attachment_impl(file_id).await
    }

    async fn find_submission_by_attachment(&self, file_id: &str) -> Result<Option<Submission>> {
        self.find_submission_by_attachment_impl(file_id).await
    }
}
