//! 成绩派生
//!
//! 纯函数，不做任何 I/O。评分策略固定：单一数值分数对应固定等级档位。

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 百分比换算
///
/// 满分为 0 的作业无法换算，按 0 处理。
pub fn grade_percentage(score: f64, max_points: f64) -> f64 {
    if max_points <= 0.0 {
        return 0.0;
    }
    round2(score / max_points * 100.0)
}

/// 百分比对应的等级，各档位下界含等于
pub fn letter_grade(percentage: f64) -> &'static str {
    if percentage >= 97.0 {
        "A+"
    } else if percentage >= 93.0 {
        "A"
    } else if percentage >= 90.0 {
        "A-"
    } else if percentage >= 87.0 {
        "B+"
    } else if percentage >= 83.0 {
        "B"
    } else if percentage >= 80.0 {
        "B-"
    } else if percentage >= 77.0 {
        "C+"
    } else if percentage >= 73.0 {
        "C"
    } else if percentage >= 70.0 {
        "C-"
    } else if percentage >= 67.0 {
        "D+"
    } else if percentage >= 63.0 {
        "D"
    } else if percentage >= 60.0 {
        "D-"
    } else {
        "F"
    }
}
