//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_eduportal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduPortalError {
            $($variant(String),)*
        }

        impl EduPortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduPortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduPortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduPortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduPortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduPortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_eduportal_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    Forbidden("E003", "Permission Denied"),
    NotEnrolled("E004", "Not Enrolled"),
    SubmissionClosed("E005", "Submission Closed"),
    InvalidGradeFormat("E006", "Invalid Grade Format"),
    InvalidGradeRange("E007", "Invalid Grade Range"),
    RepositoryOperation("E008", "Repository Operation Error"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    StoragePluginNotFound("E011", "Storage Plugin Not Found"),
}

impl EduPortalError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EduPortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduPortalError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for EduPortalError {
    fn from(err: serde_json::Error) -> Self {
        EduPortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduPortalError {
    fn from(err: chrono::ParseError) -> Self {
        EduPortalError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduPortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduPortalError::validation("test").code(), "E001");
        assert_eq!(EduPortalError::not_found("test").code(), "E002");
        assert_eq!(EduPortalError::not_enrolled("test").code(), "E004");
        assert_eq!(EduPortalError::invalid_grade_range("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduPortalError::submission_closed("test").error_type(),
            "Submission Closed"
        );
        assert_eq!(
            EduPortalError::invalid_grade_format("test").error_type(),
            "Invalid Grade Format"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EduPortalError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = EduPortalError::forbidden("没有执行该操作的权限");
        let formatted = err.format_simple();
        assert!(formatted.contains("Permission Denied"));
        assert!(formatted.contains("没有执行该操作的权限"));
    }
}
