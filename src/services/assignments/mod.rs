pub mod create;
pub mod deactivate;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::access::AccessEvaluator;
use crate::errors::Result;
use crate::models::assignments::{
    entities::Assignment,
    requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
    responses::AssignmentListResponse,
};
use crate::models::users::entities::Principal;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
    access: AccessEvaluator,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let access = AccessEvaluator::new(storage.clone());
        Self { storage, access }
    }

    /// 创建作业
    pub async fn create_assignment(
        &self,
        principal: &Principal,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, principal, req).await
    }

    /// 更新作业（部分更新）
    pub async fn update_assignment(
        &self,
        principal: &Principal,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        update::update_assignment(self, principal, assignment_id, req).await
    }

    /// 下架作业（软删除）
    pub async fn deactivate_assignment(
        &self,
        principal: &Principal,
        assignment_id: i64,
    ) -> Result<Assignment> {
        deactivate::deactivate_assignment(self, principal, assignment_id).await
    }

    /// 列出课程作业
    pub async fn list_assignments(
        &self,
        principal: &Principal,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        list::list_assignments(self, principal, query).await
    }
}
