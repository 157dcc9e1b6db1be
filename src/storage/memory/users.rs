//! 用户存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::users::{entities::User, requests::CreateUserRequest};

impl MemoryStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let user = User {
            id: self.alloc_id(),
            username: req.username,
            display_name: req.display_name,
            role: req.role,
            created_at: chrono::Utc::now(),
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }
}
