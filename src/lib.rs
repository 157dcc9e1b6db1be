//! EduPortal - 学业门户核心服务
//!
//! 基于角色的作业 / 提交 / 评分生命周期核心。传输层、会话签发与文件字节传输
//! 由宿主服务负责，宿主将已认证的主体显式传入每个操作。
//!
//! # 架构
//! - `access`: 访问控制评估器
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时初始化（日志）
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（内存后端）
//! - `utils`: 工具函数

pub mod access;
pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
