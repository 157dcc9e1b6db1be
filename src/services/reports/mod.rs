pub mod gradebook;
pub mod student_grades;

use std::sync::Arc;

use crate::access::AccessEvaluator;
use crate::errors::Result;
use crate::models::reports::responses::{CourseGradebook, StudentGradesReport};
use crate::models::users::entities::Principal;
use crate::storage::Storage;

pub struct ReportService {
    storage: Arc<dyn Storage>,
    access: AccessEvaluator,
}

impl ReportService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let access = AccessEvaluator::new(storage.clone());
        Self { storage, access }
    }

    /// 学生成绩单
    pub async fn student_grades(
        &self,
        principal: &Principal,
        student_id: i64,
    ) -> Result<StudentGradesReport> {
        student_grades::student_grades(self, principal, student_id).await
    }

    /// 课程成绩册
    pub async fn course_gradebook(
        &self,
        principal: &Principal,
        course_id: i64,
    ) -> Result<CourseGradebook> {
        gradebook::course_gradebook(self, principal, course_id).await
    }
}
