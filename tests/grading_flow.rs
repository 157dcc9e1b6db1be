//! 评分引擎：单条评分 / 重评 / 批量部分失败语义

mod common;

use chrono::Utc;

use rust_eduportal_next::errors::EduPortalError;
use rust_eduportal_next::models::grades::requests::{
    BulkGradeEntry, BulkGradeRequest, GradeSubmissionRequest,
};
use rust_eduportal_next::storage::Storage;

use common::setup;

fn grade_req(score: f64) -> GradeSubmissionRequest {
    GradeSubmissionRequest {
        score: Some(score),
        feedback: None,
    }
}

#[tokio::test]
async fn grading_persists_and_derives_percentage_and_letter() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let now = Utc::now();
    let outcome = portal
        .submit_text(&portal.student, assignment.id, "我的解答", now)
        .await;

    let graded = portal
        .grades
        .grade_submission(
            &portal.teacher,
            outcome.submission.id,
            GradeSubmissionRequest {
                score: Some(85.0),
                feedback: Some("  论证完整  ".to_string()),
            },
            now,
        )
        .await
        .unwrap();

    assert_eq!(graded.score, 85.0);
    assert_eq!(graded.percentage, 85.0);
    assert_eq!(graded.letter_grade, "B");
    assert_eq!(graded.feedback, "论证完整"); // 评语去除首尾空白
    assert!(!graded.is_regrade);
    assert!(graded.previous_score.is_none());
    assert_eq!(graded.graded_by, portal.teacher.id);

    let persisted = portal
        .storage
        .get_submission_by_id(outcome.submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(persisted.score, Some(85.0));
    assert_eq!(persisted.feedback.as_deref(), Some("论证完整"));
    assert_eq!(persisted.graded_by, Some(portal.teacher.id));
}

#[tokio::test]
async fn out_of_range_error_cites_actual_bounds() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let now = Utc::now();
    let outcome = portal
        .submit_text(&portal.student, assignment.id, "我的解答", now)
        .await;

    let err = portal
        .grades
        .grade_submission(&portal.teacher, outcome.submission.id, grade_req(150.0), now)
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::InvalidGradeRange(_)));
    assert!(err.message().contains('0'));
    assert!(err.message().contains("100"));

    let err = portal
        .grades
        .grade_submission(&portal.teacher, outcome.submission.id, grade_req(-1.0), now)
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::InvalidGradeRange(_)));
}

#[tokio::test]
async fn malformed_scores_are_rejected() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let now = Utc::now();
    let outcome = portal
        .submit_text(&portal.student, assignment.id, "我的解答", now)
        .await;

    let err = portal
        .grades
        .grade_submission(
            &portal.teacher,
            outcome.submission.id,
            GradeSubmissionRequest {
                score: None,
                feedback: None,
            },
            now,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::InvalidGradeFormat(_)));

    let err = portal
        .grades
        .grade_submission(
            &portal.teacher,
            outcome.submission.id,
            grade_req(f64::NAN),
            now,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::InvalidGradeFormat(_)));
}

#[tokio::test]
async fn regrade_reports_previous_score_only_when_value_changes() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let now = Utc::now();
    let outcome = portal
        .submit_text(&portal.student, assignment.id, "我的解答", now)
        .await;
    let id = outcome.submission.id;

    portal
        .grades
        .grade_submission(&portal.teacher, id, grade_req(80.0), now)
        .await
        .unwrap();

    let regraded = portal
        .grades
        .grade_submission(&portal.teacher, id, grade_req(90.0), now)
        .await
        .unwrap();
    assert!(regraded.is_regrade);
    assert_eq!(regraded.previous_score, Some(80.0));

    // 分数未变不算重评
    let unchanged = portal
        .grades
        .grade_submission(&portal.teacher, id, grade_req(90.0), now)
        .await
        .unwrap();
    assert!(!unchanged.is_regrade);
    assert!(unchanged.previous_score.is_none());
}

#[tokio::test]
async fn grading_requires_course_teacher_or_admin() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let now = Utc::now();
    let outcome = portal
        .submit_text(&portal.student, assignment.id, "我的解答", now)
        .await;
    let id = outcome.submission.id;

    let err = portal
        .grades
        .grade_submission(&portal.other_teacher, id, grade_req(60.0), now)
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::Forbidden(_)));

    let err = portal
        .grades
        .grade_submission(&portal.student, id, grade_req(100.0), now)
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::Forbidden(_)));

    // 管理员不受课程归属限制
    portal
        .grades
        .grade_submission(&portal.admin, id, grade_req(75.0), now)
        .await
        .unwrap();

    let err = portal
        .grades
        .grade_submission(&portal.teacher, 9999, grade_req(60.0), now)
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::NotFound(_)));
}

#[tokio::test]
async fn grading_still_works_after_deactivation() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let now = Utc::now();
    let outcome = portal
        .submit_text(&portal.student, assignment.id, "赶上了末班车", now)
        .await;

    portal
        .assignments
        .deactivate_assignment(&portal.teacher, assignment.id)
        .await
        .unwrap();

    // 下架只挡新提交，既有提交照常评分
    let graded = portal
        .grades
        .grade_submission(&portal.teacher, outcome.submission.id, grade_req(95.0), now)
        .await
        .unwrap();
    assert_eq!(graded.letter_grade, "A");
}

#[tokio::test]
async fn zero_point_assignment_only_accepts_zero() {
    let portal = setup().await;
    let assignment = portal.create_assignment_with(0.0, None).await;
    let now = Utc::now();
    let outcome = portal
        .submit_text(&portal.student, assignment.id, "参与性作业", now)
        .await;

    let err = portal
        .grades
        .grade_submission(&portal.teacher, outcome.submission.id, grade_req(1.0), now)
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::InvalidGradeRange(_)));

    let graded = portal
        .grades
        .grade_submission(&portal.teacher, outcome.submission.id, grade_req(0.0), now)
        .await
        .unwrap();
    assert_eq!(graded.percentage, 0.0);
    assert_eq!(graded.letter_grade, "F");
}

#[tokio::test]
async fn bulk_grade_collects_failures_without_aborting() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let now = Utc::now();
    let first = portal
        .submit_text(&portal.student, assignment.id, "甲的答案", now)
        .await;
    let second = portal
        .submit_text(&portal.other_student, assignment.id, "乙的答案", now)
        .await;

    let response = portal
        .grades
        .bulk_grade(
            &portal.teacher,
            assignment.id,
            BulkGradeRequest {
                entries: vec![
                    BulkGradeEntry {
                        submission_id: Some(first.submission.id),
                        score: Some(85.0),
                        feedback: Some("良好".to_string()),
                    },
                    BulkGradeEntry {
                        submission_id: Some(second.submission.id),
                        score: Some(150.0),
                        feedback: None,
                    },
                ],
            },
            now,
        )
        .await
        .unwrap();

    assert_eq!(response.total_processed, 2);
    assert_eq!(response.successful.len(), 1);
    assert_eq!(response.failed.len(), 1);
    assert_eq!(response.failed[0].submission_id, Some(second.submission.id));
    assert_eq!(response.failed[0].code, "E007"); // InvalidGradeRange

    // 有效条目已落库，不因同批其它条目失败而回滚
    let persisted = portal
        .storage
        .get_submission_by_id(first.submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(persisted.score, Some(85.0));
}

#[tokio::test]
async fn bulk_grade_partition_is_order_independent() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let now = Utc::now();
    let first = portal
        .submit_text(&portal.student, assignment.id, "甲的答案", now)
        .await;
    let second = portal
        .submit_text(&portal.other_student, assignment.id, "乙的答案", now)
        .await;

    let entries = vec![
        BulkGradeEntry {
            submission_id: Some(first.submission.id),
            score: Some(70.0),
            feedback: None,
        },
        BulkGradeEntry {
            submission_id: Some(second.submission.id),
            score: Some(500.0),
            feedback: None,
        },
        BulkGradeEntry {
            submission_id: None,
            score: Some(60.0),
            feedback: None,
        },
    ];
    let mut reversed = entries.clone();
    reversed.reverse();

    let forward = portal
        .grades
        .bulk_grade(
            &portal.teacher,
            assignment.id,
            BulkGradeRequest { entries },
            now,
        )
        .await
        .unwrap();
    let backward = portal
        .grades
        .bulk_grade(
            &portal.teacher,
            assignment.id,
            BulkGradeRequest { entries: reversed },
            now,
        )
        .await
        .unwrap();

    let ids = |outcomes: &[rust_eduportal_next::models::grades::responses::GradeOutcome]| {
        let mut v: Vec<i64> = outcomes.iter().map(|o| o.submission_id).collect();
        v.sort_unstable();
        v
    };
    assert_eq!(ids(&forward.successful), ids(&backward.successful));
    assert_eq!(forward.failed.len(), backward.failed.len());
}

#[tokio::test]
async fn bulk_grade_validates_batch_and_entries() {
    let portal = setup().await;
    let assignment = portal.create_assignment().await;
    let other_assignment = portal.create_assignment().await;
    let now = Utc::now();

    // 空批次整体拒绝
    let err = portal
        .grades
        .bulk_grade(
            &portal.teacher,
            assignment.id,
            BulkGradeRequest { entries: vec![] },
            now,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::Validation(_)));

    // 授权针对整批一次，无关教师直接被拒
    let err = portal
        .grades
        .bulk_grade(
            &portal.other_teacher,
            assignment.id,
            BulkGradeRequest {
                entries: vec![BulkGradeEntry {
                    submission_id: Some(1),
                    score: Some(50.0),
                    feedback: None,
                }],
            },
            now,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EduPortalError::Forbidden(_)));

    // 指向其它作业的提交按条目失败处理
    let foreign = portal
        .submit_text(&portal.student, other_assignment.id, "另一份作业", now)
        .await;
    let missing_id_entry = BulkGradeEntry {
        submission_id: None,
        score: Some(90.0),
        feedback: None,
    };
    let unknown_entry = BulkGradeEntry {
        submission_id: Some(9999),
        score: Some(90.0),
        feedback: None,
    };
    let foreign_entry = BulkGradeEntry {
        submission_id: Some(foreign.submission.id),
        score: Some(90.0),
        feedback: None,
    };
    let response = portal
        .grades
        .bulk_grade(
            &portal.teacher,
            assignment.id,
            BulkGradeRequest {
                entries: vec![missing_id_entry, unknown_entry, foreign_entry],
            },
            now,
        )
        .await
        .unwrap();
    assert_eq!(response.total_processed, 3);
    assert!(response.successful.is_empty());
    assert_eq!(response.failed.len(), 3);
    assert_eq!(response.failed[0].code, "E001"); // 缺少提交 ID
    assert_eq!(response.failed[1].code, "E002"); // 提交不存在
    assert_eq!(response.failed[2].code, "E001"); // 不属于该作业

    // 失败条目没有写入任何评分
    let untouched = portal
        .storage
        .get_submission_by_id(foreign.submission.id)
        .await
        .unwrap()
        .unwrap();
    assert!(untouched.score.is_none());
}
