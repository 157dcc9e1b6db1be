use serde::{Deserialize, Serialize};

/// 课程实体（本核心只读引用，账号与课程管理由外围系统维护）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    // 课程名称
    pub name: String,
    // 授课教师 ID
    pub teacher_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 选课关系
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub course_id: i64,
    pub student_id: i64,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
