use serde::Deserialize;

use crate::models::users::entities::UserRole;

/// 创建用户请求（账号/会话签发由宿主负责，这里只保留档案字段）
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub display_name: Option<String>,
    pub role: UserRole,
}
