use std::collections::HashMap;

use super::ReportService;
use crate::errors::{EduPortalError, Result};
use crate::models::reports::responses::{
    CourseGradebook, GradebookAssignment, GradebookCell, GradebookRow, GradebookStats,
    ReportStudent,
};
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::Principal;
use crate::utils::scoring;

/// 课程成绩册
///
/// 选课学生 x 活跃作业的矩阵，未提交/未评分的单元格以 None 留空。
/// 已下架作业不进入矩阵，其历史提交只在学生成绩单中体现。
pub async fn course_gradebook(
    service: &ReportService,
    principal: &Principal,
    course_id: i64,
) -> Result<CourseGradebook> {
    let course = service
        .storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| EduPortalError::not_found(format!("课程不存在: {course_id}")))?;

    service
        .access
        .ensure_course_manager(principal, course_id)
        .await?;

    let assignments = service
        .storage
        .list_assignments_by_course(course_id, false)
        .await?;
    let students = service.storage.list_enrolled_students(course_id).await?;

    // 预取所有提交，建 (作业, 学生) 索引
    let mut submission_index: HashMap<(i64, i64), Submission> = HashMap::new();
    for assignment in &assignments {
        for submission in service
            .storage
            .list_submissions_by_assignment(assignment.id)
            .await?
        {
            submission_index.insert((assignment.id, submission.student_id), submission);
        }
    }

    let possible_submissions = (students.len() * assignments.len()) as i64;
    let mut submitted_count = 0i64;
    let mut graded_count = 0i64;
    let mut rows = Vec::with_capacity(students.len());
    let mut class_percentages: Vec<f64> = Vec::new();

    for student in &students {
        let mut cells = Vec::with_capacity(assignments.len());
        let mut earned = 0.0;
        let mut possible = 0.0;
        let mut percentage_sum = 0.0;
        let mut student_graded = 0i64;

        for assignment in &assignments {
            let cell = match submission_index.get(&(assignment.id, student.id)) {
                Some(submission) => {
                    submitted_count += 1;
                    let percentage = submission
                        .score
                        .map(|score| scoring::grade_percentage(score, assignment.max_points));
                    if let Some(score) = submission.score {
                        graded_count += 1;
                        student_graded += 1;
                        earned += score;
                        possible += assignment.max_points;
                        percentage_sum += percentage.unwrap_or(0.0);
                    }
                    GradebookCell {
                        assignment_id: assignment.id,
                        submission_id: Some(submission.id),
                        submitted_at: Some(submission.submitted_at),
                        is_late: Some(submission.is_late),
                        score: submission.score,
                        percentage,
                    }
                }
                None => GradebookCell {
                    assignment_id: assignment.id,
                    submission_id: None,
                    submitted_at: None,
                    is_late: None,
                    score: None,
                    percentage: None,
                },
            };
            cells.push(cell);
        }

        let average_percentage = if student_graded > 0 {
            Some(scoring::round2(percentage_sum / student_graded as f64))
        } else {
            None
        };
        // 班级均分只取有非零平均百分比的学生
        if let Some(avg) = average_percentage
            && avg > 0.0
        {
            class_percentages.push(avg);
        }

        rows.push(GradebookRow {
            student: ReportStudent {
                id: student.id,
                username: student.username.clone(),
                display_name: student.display_name.clone(),
            },
            cells,
            total_earned: scoring::round2(earned),
            total_possible: scoring::round2(possible),
            average_percentage,
        });
    }

    let stats = GradebookStats {
        class_average_percentage: if class_percentages.is_empty() {
            0.0
        } else {
            scoring::round2(
                class_percentages.iter().sum::<f64>() / class_percentages.len() as f64,
            )
        },
        submission_rate: if possible_submissions > 0 {
            scoring::round2(submitted_count as f64 / possible_submissions as f64 * 100.0)
        } else {
            0.0
        },
        grading_progress: if submitted_count > 0 {
            scoring::round2(graded_count as f64 / submitted_count as f64 * 100.0)
        } else {
            0.0
        },
    };

    Ok(CourseGradebook {
        course_id,
        course_name: course.name,
        assignments: assignments
            .iter()
            .map(|a| GradebookAssignment {
                id: a.id,
                title: a.title.clone(),
                max_points: a.max_points,
                due_at: a.due_at,
            })
            .collect(),
        students: rows,
        stats,
    })
}
