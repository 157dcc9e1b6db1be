use chrono::{DateTime, Utc};
use tracing::info;

use super::GradeService;
use crate::errors::{EduPortalError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::grades::{
    requests::{GradeSubmissionRequest, GradeWrite},
    responses::GradeOutcome,
};
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::Principal;
use crate::utils::{scoring, validate};

/// 单条评分
pub async fn grade_submission(
    service: &GradeService,
    principal: &Principal,
    submission_id: i64,
    req: GradeSubmissionRequest,
    now: DateTime<Utc>,
) -> Result<GradeOutcome> {
    // 1. 解析提交与所属作业
    let submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("提交不存在: {submission_id}")))?;
    let assignment = service
        .storage
        .get_assignment_by_id(submission.assignment_id)
        .await?
        .ok_or_else(|| {
            EduPortalError::not_found(format!("作业不存在: {}", submission.assignment_id))
        })?;

    // 2. 授课教师或管理员
    service
        .access
        .ensure_course_manager(principal, assignment.course_id)
        .await?;

    let outcome = apply_grade(
        service,
        principal,
        &assignment,
        &submission,
        req.score,
        req.feedback,
        now,
    )
    .await?;

    info!(
        "提交已评分: submission_id={} score={} regrade={}",
        outcome.submission_id, outcome.score, outcome.is_regrade
    );
    Ok(outcome)
}

/// 评分核心：校验分数、落库并派生百分比与等级
///
/// 单条与批量共用；授权由调用方完成。
pub(super) async fn apply_grade(
    service: &GradeService,
    principal: &Principal,
    assignment: &Assignment,
    submission: &Submission,
    score: Option<f64>,
    feedback: Option<String>,
    now: DateTime<Utc>,
) -> Result<GradeOutcome> {
    // 分数必须是有效数字
    let score = match score {
        Some(s) if s.is_finite() => s,
        Some(s) => {
            return Err(EduPortalError::invalid_grade_format(format!(
                "评分必须是有效的数字: {s}"
            )));
        }
        None => return Err(EduPortalError::invalid_grade_format("评分不能为空")),
    };

    // 分数必须落在该作业的分值范围内，错误信息带上实际边界
    if score < 0.0 || score > assignment.max_points {
        return Err(EduPortalError::invalid_grade_range(format!(
            "评分必须在 0 和 {} 之间",
            assignment.max_points
        )));
    }

    // 评语去除首尾空白，缺省按空字符串记录
    let feedback = feedback.map(|f| f.trim().to_string()).unwrap_or_default();
    validate::validate_feedback(&feedback).map_err(EduPortalError::validation)?;

    // 记录旧分数用于重评判定
    let previous_score = submission.score;
    let was_graded = previous_score.is_some();

    let updated = service
        .storage
        .apply_grade(
            submission.id,
            GradeWrite {
                score,
                feedback: feedback.clone(),
                graded_at: now,
                graded_by: principal.id,
            },
        )
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("提交不存在: {}", submission.id)))?;

    let percentage = scoring::grade_percentage(score, assignment.max_points);
    let is_regrade = was_graded && previous_score != Some(score);

    Ok(GradeOutcome {
        submission_id: updated.id,
        score,
        feedback,
        percentage,
        letter_grade: scoring::letter_grade(percentage).to_string(),
        graded_at: now,
        graded_by: principal.id,
        is_regrade,
        previous_score: if is_regrade { previous_score } else { None },
    })
}
