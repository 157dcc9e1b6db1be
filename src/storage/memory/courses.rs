//! 课程与选课存储操作

use super::MemoryStorage;
use crate::errors::{EduPortalError, Result};
use crate::models::courses::{
    entities::{Course, Enrollment},
    requests::CreateCourseRequest,
};
use crate::models::users::entities::{User, UserRole};

impl MemoryStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let teacher = self
            .users
            .get(&req.teacher_id)
            .map(|u| u.value().clone())
            .ok_or_else(|| EduPortalError::not_found(format!("用户不存在: {}", req.teacher_id)))?;
        if teacher.role != UserRole::Teacher {
            return Err(EduPortalError::validation(format!(
                "用户 {} 不是教师，不能作为授课教师",
                req.teacher_id
            )));
        }

        let course = Course {
            id: self.alloc_id(),
            name: req.name,
            teacher_id: req.teacher_id,
            created_at: chrono::Utc::now(),
        };
        self.courses.insert(course.id, course.clone());
        Ok(course)
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(self.courses.get(&course_id).map(|c| c.value().clone()))
    }

    /// 学生选课（重复选课幂等）
    pub async fn enroll_student_impl(&self, course_id: i64, student_id: i64) -> Result<Enrollment> {
        if !self.courses.contains_key(&course_id) {
            return Err(EduPortalError::not_found(format!(
                "课程不存在: {course_id}"
            )));
        }
        let student = self
            .users
            .get(&student_id)
            .map(|u| u.value().clone())
            .ok_or_else(|| EduPortalError::not_found(format!("用户不存在: {student_id}")))?;
        if student.role != UserRole::Student {
            return Err(EduPortalError::validation(format!(
                "用户 {student_id} 不是学生，不能选课"
            )));
        }

        let enrollment = self
            .enrollments
            .entry((course_id, student_id))
            .or_insert_with(|| Enrollment {
                course_id,
                student_id,
                joined_at: chrono::Utc::now(),
            })
            .value()
            .clone();
        Ok(enrollment)
    }

    /// 学生是否已选某课程
    pub async fn is_student_enrolled_impl(&self, course_id: i64, student_id: i64) -> Result<bool> {
        Ok(self.enrollments.contains_key(&(course_id, student_id)))
    }

    /// 课程的选课学生名册
    pub async fn list_enrolled_students_impl(&self, course_id: i64) -> Result<Vec<User>> {
        let mut students: Vec<User> = self
            .enrollments
            .iter()
            .filter(|e| e.key().0 == course_id)
            .filter_map(|e| self.users.get(&e.key().1).map(|u| u.value().clone()))
            .collect();
        students.sort_by_key(|u| u.id);
        Ok(students)
    }

    /// 学生选修的课程
    pub async fn list_student_courses_impl(&self, student_id: i64) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .enrollments
            .iter()
            .filter(|e| e.key().1 == student_id)
            .filter_map(|e| self.courses.get(&e.key().0).map(|c| c.value().clone()))
            .collect();
        courses.sort_by_key(|c| c.id);
        Ok(courses)
    }
}
