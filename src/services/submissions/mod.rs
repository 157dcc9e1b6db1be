pub mod detail;
pub mod list;
pub mod submit;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::access::AccessEvaluator;
use crate::errors::Result;
use crate::models::submissions::{
    entities::Submission,
    requests::{SubmissionListQuery, SubmitAssignmentRequest},
    responses::{SubmissionListResponse, SubmitOutcome},
};
use crate::models::users::entities::Principal;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Arc<dyn Storage>,
    access: AccessEvaluator,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let access = AccessEvaluator::new(storage.clone());
        Self { storage, access }
    }

    /// 提交作业（首次提交或覆盖式重交）
    ///
    /// now 由调用方传入，迟交判定与提交时间都以它为准。
    pub async fn submit(
        &self,
        principal: &Principal,
        req: SubmitAssignmentRequest,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome> {
        submit::submit(self, principal, req, now).await
    }

    /// 获取提交详情
    pub async fn get_submission(
        &self,
        principal: &Principal,
        submission_id: i64,
    ) -> Result<Submission> {
        detail::get_submission(self, principal, submission_id).await
    }

    /// 列出提交
    pub async fn list_submissions(
        &self,
        principal: &Principal,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        list::list_submissions(self, principal, query).await
    }
}
