//! 日志初始化
//!
//! 本 crate 自身只产生 tracing 事件，订阅器由宿主进程在启动时装配。

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;

/// 初始化全局 tracing 订阅器
///
/// 开发环境输出带文件名与行号的彩色日志，生产环境输出 JSON。
/// 返回的 guard 必须由调用方持有到进程结束，否则缓冲日志会丢失。
/// 全局订阅器已存在时静默跳过（例如测试多次初始化）。
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        let _ = tracing_builder
            .with_file(true)
            .with_line_number(true)
            .try_init();
    } else {
        let _ = tracing_builder.json().try_init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_repeatable() {
        let config = AppConfig::load().expect("defaults should load");
        let _guard_a = init_tracing(&config);
        let _guard_b = init_tracing(&config);
        tracing::debug!("初始化后仍可正常记录");
    }
}
