//! # nalscan-core
//!
//! nalscan 核心库, 提供错误类型与码流工作缓冲区.

pub mod buffer;
pub mod error;

// 重导出常用类型
pub use buffer::StreamBuffer;
pub use error::{NalError, NalResult};
