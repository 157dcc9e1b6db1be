use chrono::{DateTime, Utc};
use tracing::debug;

use super::SubmissionService;
use crate::errors::{EduPortalError, Result};
use crate::models::submissions::{
    requests::{SubmissionWrite, SubmitAssignmentRequest},
    responses::SubmitOutcome,
};
use crate::models::users::entities::Principal;
use crate::utils::validate;

/// 提交作业
///
/// 每个 (作业, 学生) 对只保留一条记录：重交就地覆盖正文、附件、时间与迟交标记，
/// 并无条件清空评分字段。重新给分必须由教师显式发起。
pub async fn submit(
    service: &SubmissionService,
    principal: &Principal,
    req: SubmitAssignmentRequest,
    now: DateTime<Utc>,
) -> Result<SubmitOutcome> {
    // 1. 解析作业
    let assignment = service
        .storage
        .get_assignment_by_id(req.assignment_id)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("作业不存在: {}", req.assignment_id)))?;

    // 2. 只能以本人身份提交，且必须已选课
    if req.student_id != principal.id {
        return Err(EduPortalError::forbidden("只能以本人身份提交作业"));
    }
    service
        .access
        .ensure_enrolled_student(principal, assignment.course_id)
        .await?;

    // 3. 作业必须仍接受提交
    if !assignment.accepts_submissions(now) {
        return Err(EduPortalError::submission_closed(format!(
            "作业 {} 已停止接受提交 (截止时间: {})",
            assignment.id, assignment.due_at
        )));
    }

    // 4. 正文与附件校验
    let content = req
        .content
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from);
    validate::validate_submission_content(content.as_deref(), req.attachments.len())
        .map_err(EduPortalError::validation)?;

    // 附件必须已登记且归提交者所有
    for attachment in &req.attachments {
        let file = service
            .storage
            .get_file_by_id(&attachment.file_id)
            .await?
            .ok_or_else(|| {
                EduPortalError::not_found(format!("文件不存在: {}", attachment.file_id))
            })?;
        if file.uploader_id != principal.id {
            return Err(EduPortalError::forbidden(format!(
                "无权使用此文件: {}",
                attachment.file_id
            )));
        }
    }

    // 5. 迟交按此刻生效的截止时间判定，之后修改截止时间不追溯
    let is_late = now > assignment.due_at;

    let (submission, resubmitted) = service
        .storage
        .upsert_submission(SubmissionWrite {
            assignment_id: assignment.id,
            student_id: principal.id,
            content,
            attachments: req.attachments,
            submitted_at: now,
            is_late,
        })
        .await?;

    debug!(
        "提交已记录: id={} assignment_id={} student_id={} attempt={} late={}",
        submission.id, submission.assignment_id, submission.student_id, submission.attempt, is_late
    );
    Ok(SubmitOutcome {
        submission,
        resubmitted,
    })
}
