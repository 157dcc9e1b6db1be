use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::{AssignmentListQuery, NewAssignment, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    courses::{
        entities::{Course, Enrollment},
        requests::CreateCourseRequest,
    },
    files::entities::File,
    grades::requests::GradeWrite,
    submissions::{
        entities::Submission,
        requests::{SubmissionListQuery, SubmissionWrite},
        responses::SubmissionListResponse,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::config::AppConfig;
use crate::errors::{EduPortalError, Result};

pub mod memory;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 课程与选课方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 学生选课
    async fn enroll_student(&self, course_id: i64, student_id: i64) -> Result<Enrollment>;
    // 学生是否已选某课程
    async fn is_student_enrolled(&self, course_id: i64, student_id: i64) -> Result<bool>;
    // 课程的选课学生名册
    async fn list_enrolled_students(&self, course_id: i64) -> Result<Vec<User>>;
    // 学生选修的课程
    async fn list_student_courses(&self, student_id: i64) -> Result<Vec<Course>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: NewAssignment,
    ) -> Result<Assignment>;
    // 通过ID获取作业信息
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 部分更新作业，仅提交的字段生效
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 变更作业生命周期状态
    async fn set_assignment_status(
        &self,
        assignment_id: i64,
        status: AssignmentStatus,
    ) -> Result<Option<Assignment>>;
    // 课程下的作业（include_deactivated 为 false 时仅活跃作业）
    async fn list_assignments_by_course(
        &self,
        course_id: i64,
        include_deactivated: bool,
    ) -> Result<Vec<Assignment>>;
    // 列出作业（分页）
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        include_deactivated: bool,
    ) -> Result<AssignmentListResponse>;

    /// 提交管理方法
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 获取 (作业, 学生) 对的唯一提交
    async fn get_submission_by_pair(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 插入或覆盖 (作业, 学生) 对的提交；返回 true 表示覆盖了已有记录。
    // 覆盖时评分字段一并清空，唯一性由存储层保证。
    async fn upsert_submission(&self, record: SubmissionWrite) -> Result<(Submission, bool)>;
    // 写入评分字段
    async fn apply_grade(&self, submission_id: i64, grade: GradeWrite)
    -> Result<Option<Submission>>;
    // 某作业的全部提交
    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 某学生的全部提交
    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>>;
    // 列出提交（分页）
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;

    /// 文件管理方法
    // 登记文件元数据，返回含下载令牌的记录
    async fn register_file(&self, file_name: &str, uploader_id: i64) -> Result<File>;
    // 通过令牌获取文件信息
    async fn get_file_by_id(&self, file_id: &str) -> Result<Option<File>>;
    // 引用了该文件的作业（附件授权用）
    async fn find_assignment_by_attachment(&self, file_id: &str) -> Result<Option<Assignment>>;
    // 引用了该文件的提交（附件授权用）
    async fn find_submission_by_attachment(&self, file_id: &str) -> Result<Option<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    match config.storage.backend.as_str() {
        "memory" => Ok(Arc::new(memory::MemoryStorage::new())),
        other => Err(EduPortalError::storage_plugin_not_found(format!(
            "未知的存储后端: {other}. 支持: memory"
        ))),
    }
}
