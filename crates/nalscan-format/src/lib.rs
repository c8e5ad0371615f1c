//! # nalscan-format
//!
//! Annex-B 字节流处理:
//!
//! - [`annexb`]: 纯函数式分帧器, 在缓冲数据中定位起始码并给出单元范围
//! - [`scanner`]: 驱动分帧器的读取循环, 为单元编号
//! - [`io`]: 文件 / 标准输入
//! - [`config`]: 扫描配置与默认值

pub mod annexb;
pub mod config;
pub mod io;
pub mod scanner;

// 重导出常用类型
pub use annexb::{AnnexBFramer, FrameStep, START_CODE};
pub use config::ScanConfig;
pub use io::InputSource;
pub use scanner::{NalScanner, ScannedUnit};
