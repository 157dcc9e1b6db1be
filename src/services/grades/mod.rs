pub mod bulk;
pub mod grade;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::access::AccessEvaluator;
use crate::errors::Result;
use crate::models::grades::{
    requests::{BulkGradeRequest, GradeSubmissionRequest},
    responses::{BulkGradeResponse, GradeOutcome},
};
use crate::models::users::entities::Principal;
use crate::storage::Storage;

pub struct GradeService {
    storage: Arc<dyn Storage>,
    access: AccessEvaluator,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let access = AccessEvaluator::new(storage.clone());
        Self { storage, access }
    }

    /// 单条评分
    pub async fn grade_submission(
        &self,
        principal: &Principal,
        submission_id: i64,
        req: GradeSubmissionRequest,
        now: DateTime<Utc>,
    ) -> Result<GradeOutcome> {
        grade::grade_submission(self, principal, submission_id, req, now).await
    }

    /// 批量评分（逐条独立，部分失败不回滚）
    pub async fn bulk_grade(
        &self,
        principal: &Principal,
        assignment_id: i64,
        req: BulkGradeRequest,
        now: DateTime<Utc>,
    ) -> Result<BulkGradeResponse> {
        bulk::bulk_grade(self, principal, assignment_id, req, now).await
    }
}
