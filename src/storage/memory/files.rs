//! 文件元数据存储操作
//!
//! 只登记归属信息，字节内容由外部文件库保管。

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::{
    assignments::entities::Assignment, files::entities::File, submissions::entities::Submission,
};

impl MemoryStorage {
    /// 登记文件元数据，生成下载令牌
    pub async fn register_file_impl(&self, file_name: &str, uploader_id: i64) -> Result<File> {
        let file = File {
            file_id: format!("f{:08}", self.alloc_id()),
            file_name: file_name.to_string(),
            uploader_id,
            created_at: chrono::Utc::now(),
        };
        self.files.insert(file.file_id.clone(), file.clone());
        Ok(file)
    }

    /// 通过令牌获取文件
    pub async fn get_file_by_id_impl(&self, file_id: &str) -> Result<Option<File>> {
        Ok(self.files.get(file_id).map(|f| f.value().clone()))
    }

    /// 引用了该文件的作业
    pub async fn find_assignment_by_attachment_impl(
        &self,
        file_id: &str,
    ) -> Result<Option<Assignment>> {
        Ok(self
            .assignments
            .iter()
            .find(|a| a.attachments.iter().any(|att| att.file_id == file_id))
            .map(|a| a.value().clone()))
    }

    /// 引用了该文件的提交
    pub async fn find_submission_by_attachment_impl(
        &self,
        file_id: &str,
    ) -> Result<Option<Submission>> {
        Ok(self
            .submissions
            .iter()
            .find(|s| s.attachments.iter().any(|att| att.file_id == file_id))
            .map(|s| s.value().clone()))
    }
}
