use serde::{Deserialize, Serialize};

/// 文件元数据
///
/// 字节内容存放在外部文件库，核心只登记归属信息用于附件授权。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    // 下载令牌，同时作为附件引用的文件 ID
    pub file_id: String,
    pub file_name: String,
    // 上传者 ID
    pub uploader_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
