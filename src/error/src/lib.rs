//! 错误处理模块
//!
//! 演示本身没有领域错误：物品类型不匹配在编译期就被拒绝。
//! 这里只覆盖唯一真实的失败来源，即向终端输出叙述文本时的IO错误。

use thiserror::Error;

/// 运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 输出端已关闭（例如管道另一端提前退出）
    #[error("Output stream closed")]
    OutputClosed,
}

impl GameError {
    /// 把IO错误归类：管道断开单独处理
    pub fn from_io(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::BrokenPipe => GameError::OutputClosed,
            _ => GameError::IoError(err),
        }
    }
}

/// 处理错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::OutputClosed => "输出已关闭，叙述被截断".to_string(),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::PermissionDenied => "没有权限写入输出".to_string(),
            _ => format!("IO错误: {}", e),
        },
    }
}
