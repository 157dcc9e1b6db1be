//! 集成测试共享夹具：内存后端 + 一套师生账号与课程

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use rust_eduportal_next::models::assignments::entities::Assignment;
use rust_eduportal_next::models::assignments::requests::CreateAssignmentRequest;
use rust_eduportal_next::models::courses::requests::CreateCourseRequest;
use rust_eduportal_next::models::submissions::requests::SubmitAssignmentRequest;
use rust_eduportal_next::models::users::entities::{Principal, User, UserRole};
use rust_eduportal_next::models::users::requests::CreateUserRequest;
use rust_eduportal_next::services::{
    AssignmentService, GradeService, ReportService, SubmissionService,
};
use rust_eduportal_next::storage::{Storage, memory::MemoryStorage};

pub struct TestPortal {
    pub storage: Arc<dyn Storage>,
    pub assignments: AssignmentService,
    pub submissions: SubmissionService,
    pub grades: GradeService,
    pub reports: ReportService,
    pub admin: Principal,
    pub teacher: Principal,
    pub other_teacher: Principal,
    pub student: Principal,
    pub other_student: Principal,
    pub course_id: i64,
}

pub fn principal_of(user: &User) -> Principal {
    Principal {
        id: user.id,
        role: user.role.clone(),
    }
}

async fn create_user(storage: &Arc<dyn Storage>, username: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            display_name: None,
            role,
        })
        .await
        .unwrap()
}

/// 建一套标准环境：一门课、一名授课教师、两名选课学生、一名无关教师、一名管理员
pub async fn setup() -> TestPortal {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

    let admin = create_user(&storage, "admin_zhao", UserRole::Admin).await;
    let teacher = create_user(&storage, "teacher_wang", UserRole::Teacher).await;
    let other_teacher = create_user(&storage, "teacher_li", UserRole::Teacher).await;
    let student = create_user(&storage, "student_chen", UserRole::Student).await;
    let other_student = create_user(&storage, "student_sun", UserRole::Student).await;

    let course = storage
        .create_course(CreateCourseRequest {
            name: "数据结构".to_string(),
            teacher_id: teacher.id,
        })
        .await
        .unwrap();
    storage.enroll_student(course.id, student.id).await.unwrap();
    storage
        .enroll_student(course.id, other_student.id)
        .await
        .unwrap();

    TestPortal {
        assignments: AssignmentService::new(storage.clone()),
        submissions: SubmissionService::new(storage.clone()),
        grades: GradeService::new(storage.clone()),
        reports: ReportService::new(storage.clone()),
        storage,
        admin: principal_of(&admin),
        teacher: principal_of(&teacher),
        other_teacher: principal_of(&other_teacher),
        student: principal_of(&student),
        other_student: principal_of(&other_student),
        course_id: course.id,
    }
}

pub fn assignment_request(course_id: i64, due_at: DateTime<Utc>) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        course_id,
        title: Some("第一次上机作业".to_string()),
        description: Some("实现一个链表并给出完整测试。".to_string()),
        due_at: Some(due_at),
        max_points: Some(100.0),
        allow_late: None,
        attachments: vec![],
    }
}

impl TestPortal {
    /// 以授课教师身份创建一个满分 100、一小时后截止的作业
    pub async fn create_assignment(&self) -> Assignment {
        self.assignments
            .create_assignment(
                &self.teacher,
                assignment_request(self.course_id, Utc::now() + Duration::hours(1)),
            )
            .await
            .unwrap()
    }

    /// 同上，但可指定满分与是否允许迟交
    pub async fn create_assignment_with(
        &self,
        max_points: f64,
        allow_late: Option<bool>,
    ) -> Assignment {
        let mut req = assignment_request(self.course_id, Utc::now() + Duration::hours(1));
        req.max_points = Some(max_points);
        req.allow_late = allow_late;
        self.assignments
            .create_assignment(&self.teacher, req)
            .await
            .unwrap()
    }

    /// 以某学生身份提交纯文本作业
    pub async fn submit_text(
        &self,
        who: &Principal,
        assignment_id: i64,
        content: &str,
        now: DateTime<Utc>,
    ) -> rust_eduportal_next::models::submissions::responses::SubmitOutcome {
        self.submissions
            .submit(who, submit_request(assignment_id, who.id, content), now)
            .await
            .unwrap()
    }
}

pub fn submit_request(assignment_id: i64, student_id: i64, content: &str) -> SubmitAssignmentRequest {
    SubmitAssignmentRequest {
        assignment_id,
        student_id,
        content: Some(content.to_string()),
        attachments: vec![],
    }
}
