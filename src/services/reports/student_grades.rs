use std::collections::HashMap;

use super::ReportService;
use crate::errors::{EduPortalError, Result};
use crate::models::reports::responses::{
    CourseGradeBreakdown, GradedAssignmentEntry, OverallGradeStats, ReportStudent,
    StudentGradesReport,
};
use crate::models::users::entities::{Principal, UserRole};
use crate::utils::scoring;

/// 学生成绩单
///
/// 只折叠已评分的提交，未评分的既不计数也不按零分摊平均。
pub async fn student_grades(
    service: &ReportService,
    principal: &Principal,
    student_id: i64,
) -> Result<StudentGradesReport> {
    let student = service
        .storage
        .get_user_by_id(student_id)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("用户不存在: {student_id}")))?;
    if student.role != UserRole::Student {
        return Err(EduPortalError::validation(format!(
            "用户 {student_id} 不是学生"
        )));
    }

    service
        .access
        .ensure_can_view_student_grades(principal, student_id)
        .await?;

    let submissions = service.storage.list_submissions_by_student(student_id).await?;

    let mut per_course: HashMap<i64, Vec<GradedAssignmentEntry>> = HashMap::new();
    let mut total_earned = 0.0;
    let mut total_possible = 0.0;
    let mut score_sum = 0.0;
    let mut percentage_sum = 0.0;
    let mut graded_count = 0i64;

    for submission in submissions {
        let Some(score) = submission.score else {
            continue;
        };
        // 已下架作业的历史提交照常计入成绩
        let Some(assignment) = service
            .storage
            .get_assignment_by_id(submission.assignment_id)
            .await?
        else {
            continue;
        };

        let percentage = scoring::grade_percentage(score, assignment.max_points);
        per_course
            .entry(assignment.course_id)
            .or_default()
            .push(GradedAssignmentEntry {
                assignment_id: assignment.id,
                title: assignment.title.clone(),
                max_points: assignment.max_points,
                score,
                percentage,
                letter_grade: scoring::letter_grade(percentage).to_string(),
                is_late: submission.is_late,
                graded_at: submission.graded_at,
            });

        total_earned += score;
        total_possible += assignment.max_points;
        score_sum += score;
        percentage_sum += percentage;
        graded_count += 1;
    }

    let overall = OverallGradeStats {
        total_assignments: graded_count,
        total_earned: scoring::round2(total_earned),
        total_possible: scoring::round2(total_possible),
        average_score: if graded_count > 0 {
            scoring::round2(score_sum / graded_count as f64)
        } else {
            0.0
        },
        average_percentage: if graded_count > 0 {
            scoring::round2(percentage_sum / graded_count as f64)
        } else {
            0.0
        },
    };

    let mut courses = Vec::with_capacity(per_course.len());
    for (course_id, mut entries) in per_course {
        let Some(course) = service.storage.get_course_by_id(course_id).await? else {
            continue;
        };
        entries.sort_by_key(|e| e.assignment_id);

        let earned: f64 = entries.iter().map(|e| e.score).sum();
        let possible: f64 = entries.iter().map(|e| e.max_points).sum();
        let percentage_sum: f64 = entries.iter().map(|e| e.percentage).sum();
        let count = entries.len() as f64;

        courses.push(CourseGradeBreakdown {
            course_id,
            course_name: course.name,
            assignments: entries,
            total_earned: scoring::round2(earned),
            total_possible: scoring::round2(possible),
            average_percentage: scoring::round2(percentage_sum / count),
        });
    }
    // HashMap 迭代无序，输出按课程 ID 稳定排序
    courses.sort_by_key(|c| c.course_id);

    Ok(StudentGradesReport {
        student: ReportStudent {
            id: student.id,
            username: student.username,
            display_name: student.display_name,
        },
        overall,
        courses,
    })
}
