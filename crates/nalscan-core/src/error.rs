//! 统一错误类型定义.
//!
//! 所有 nalscan crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// nalscan 统一错误类型
#[derive(Debug, Error)]
pub enum NalError {
    /// 无法打开输入文件
    #[error("无法打开文件 '{path}': {source}")]
    InputOpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 位置参数过多 (最多一个输入文件)
    #[error("参数数量不正确: 期望最多 1 个输入, 实际 {0} 个")]
    TooManyArguments(usize),

    /// 在找到下一个起始码之前, 缓冲数据已达到上限
    #[error("NAL 单元过大: 缓冲超过 {limit} 字节仍未找到起始码")]
    UnitTooLarge { limit: usize },

    /// 读取输入失败
    #[error("读取输入失败: {0}")]
    ReadFailure(#[source] std::io::Error),

    /// 写出报告失败
    #[error("写出结果失败: {0}")]
    OutputFailed(#[source] std::io::Error),

    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

impl NalError {
    /// 进程退出码
    ///
    /// 所有错误均为致命错误, 统一返回 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// 是否由下游管道关闭引起 (如 `nalscan x.264 | head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::OutputFailed(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// nalscan 统一 Result 类型
pub type NalResult<T> = Result<T, NalError>;
