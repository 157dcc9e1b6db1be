use chrono::{DateTime, Utc};
use serde::Serialize;

/// 报表中的学生信息
#[derive(Debug, Clone, Serialize)]
pub struct ReportStudent {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

// ============ 学生成绩单 ============

/// 总体统计（只统计已评分提交，未评分不计入也不按零分处理）
#[derive(Debug, Clone, Serialize)]
pub struct OverallGradeStats {
    pub total_assignments: i64,
    pub total_earned: f64,
    pub total_possible: f64,
    pub average_score: f64,
    pub average_percentage: f64,
}

/// 成绩单中的单项作业成绩
#[derive(Debug, Clone, Serialize)]
pub struct GradedAssignmentEntry {
    pub assignment_id: i64,
    pub title: String,
    pub max_points: f64,
    pub score: f64,
    pub percentage: f64,
    pub letter_grade: String,
    pub is_late: bool,
    pub graded_at: Option<DateTime<Utc>>,
}

/// 按课程拆分的成绩
#[derive(Debug, Clone, Serialize)]
pub struct CourseGradeBreakdown {
    pub course_id: i64,
    pub course_name: String,
    pub assignments: Vec<GradedAssignmentEntry>,
    pub total_earned: f64,
    pub total_possible: f64,
    pub average_percentage: f64,
}

/// 学生成绩单
#[derive(Debug, Serialize)]
pub struct StudentGradesReport {
    pub student: ReportStudent,
    pub overall: OverallGradeStats,
    pub courses: Vec<CourseGradeBreakdown>,
}

// ============ 课程成绩册 ============

/// 成绩册表头中的作业
#[derive(Debug, Clone, Serialize)]
pub struct GradebookAssignment {
    pub id: i64,
    pub title: String,
    pub max_points: f64,
    pub due_at: DateTime<Utc>,
}

/// 成绩册单元格（学生 x 作业）
#[derive(Debug, Clone, Serialize)]
pub struct GradebookCell {
    pub assignment_id: i64,
    pub submission_id: Option<i64>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub is_late: Option<bool>,
    pub score: Option<f64>,
    pub percentage: Option<f64>,
}

/// 成绩册中一个学生的行
#[derive(Debug, Clone, Serialize)]
pub struct GradebookRow {
    pub student: ReportStudent,
    pub cells: Vec<GradebookCell>,
    pub total_earned: f64,
    pub total_possible: f64,
    // 无已评分提交时为 None
    pub average_percentage: Option<f64>,
}

/// 课程级汇总
#[derive(Debug, Clone, Serialize)]
pub struct GradebookStats {
    // 学生非零平均百分比的均值
    pub class_average_percentage: f64,
    // 已提交 / (学生数 x 作业数)，百分比
    pub submission_rate: f64,
    // 已评分 / 已提交，百分比
    pub grading_progress: f64,
}

/// 课程成绩册：选课学生 x 活跃作业的矩阵
#[derive(Debug, Serialize)]
pub struct CourseGradebook {
    pub course_id: i64,
    pub course_name: String,
    pub assignments: Vec<GradebookAssignment>,
    pub students: Vec<GradebookRow>,
    pub stats: GradebookStats,
}
