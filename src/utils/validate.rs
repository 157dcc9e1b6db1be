//! 字段校验
//!
//! 长度均按字符数（chars）而不是字节数计算。

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    // 标题长度校验：3 <= x <= 200
    let len = title.chars().count();
    if !(3..=200).contains(&len) {
        return Err("Title length must be between 3 and 200 characters");
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), &'static str> {
    // 描述长度校验：10 <= x <= 2000
    let len = description.chars().count();
    if !(10..=2000).contains(&len) {
        return Err("Description length must be between 10 and 2000 characters");
    }
    Ok(())
}

pub fn validate_max_points(max_points: f64) -> Result<(), &'static str> {
    // 满分范围校验：0 <= x <= 1000
    if !max_points.is_finite() || !(0.0..=1000.0).contains(&max_points) {
        return Err("Max points must be between 0 and 1000");
    }
    Ok(())
}

/// 提交正文与附件的组合校验
///
/// 正文最长 5000 字符；没有附件时正文不能为空。
pub fn validate_submission_content(
    content: Option<&str>,
    attachment_count: usize,
) -> Result<(), &'static str> {
    if let Some(content) = content
        && content.chars().count() > 5000
    {
        return Err("Submission content must not exceed 5000 characters");
    }
    let has_content = content.is_some_and(|c| !c.trim().is_empty());
    if !has_content && attachment_count == 0 {
        return Err("Submission must contain content or at least one attachment");
    }
    Ok(())
}

pub fn validate_feedback(feedback: &str) -> Result<(), &'static str> {
    // 评语长度校验：<= 2000
    if feedback.chars().count() > 2000 {
        return Err("Feedback must not exceed 2000 characters");
    }
    Ok(())
}
