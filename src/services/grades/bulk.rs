use chrono::{DateTime, Utc};
use tracing::info;

use super::{GradeService, grade};
use crate::errors::{EduPortalError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::grades::{
    requests::{BulkGradeEntry, BulkGradeRequest},
    responses::{BulkGradeFailure, BulkGradeResponse, GradeOutcome},
};
use crate::models::users::entities::Principal;

/// 批量评分
///
/// 针对整个作业授权一次，之后逐条独立处理：单条失败记入 failed 列表，
/// 不中断批次，也不回滚已成功的条目。条目之间无共享状态，结果与条目顺序无关。
pub async fn bulk_grade(
    service: &GradeService,
    principal: &Principal,
    assignment_id: i64,
    req: BulkGradeRequest,
    now: DateTime<Utc>,
) -> Result<BulkGradeResponse> {
    if req.entries.is_empty() {
        return Err(EduPortalError::validation("批量评分条目不能为空"));
    }

    let assignment = service
        .storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("作业不存在: {assignment_id}")))?;
    service
        .access
        .ensure_course_manager(principal, assignment.course_id)
        .await?;

    let total_processed = req.entries.len() as i64;
    let mut successful: Vec<GradeOutcome> = Vec::new();
    let mut failed: Vec<BulkGradeFailure> = Vec::new();

    for entry in req.entries {
        let submission_id = entry.submission_id;
        match grade_entry(service, principal, &assignment, entry, now).await {
            Ok(outcome) => successful.push(outcome),
            Err(err) => failed.push(BulkGradeFailure {
                submission_id,
                code: err.code().to_string(),
                reason: err.message().to_string(),
            }),
        }
    }

    info!(
        "批量评分完成: assignment_id={} successful={} failed={}",
        assignment.id,
        successful.len(),
        failed.len()
    );
    Ok(BulkGradeResponse {
        successful,
        failed,
        total_processed,
    })
}

/// 处理单个批量条目
async fn grade_entry(
    service: &GradeService,
    principal: &Principal,
    assignment: &Assignment,
    entry: BulkGradeEntry,
    now: DateTime<Utc>,
) -> Result<GradeOutcome> {
    let submission_id = entry
        .submission_id
        .ok_or_else(|| EduPortalError::validation("缺少提交 ID"))?;

    let submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("提交不存在: {submission_id}")))?;

    if submission.assignment_id != assignment.id {
        return Err(EduPortalError::validation(format!(
            "提交 {submission_id} 不属于作业 {}",
            assignment.id
        )));
    }

    grade::apply_grade(
        service,
        principal,
        assignment,
        &submission,
        entry.score,
        entry.feedback,
        now,
    )
    .await
}
