//! # nalscan
//!
//! 从 H.264/HEVC Annex-B 裸码流中切分 NAL 单元并按头部类型分类.
//!
//! # 快速开始
//!
//! ```rust
//! use nalscan::format::{NalScanner, ScanConfig};
//! use nalscan::codec::NalSyntax;
//!
//! let stream: &[u8] = &[0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x00, 0x00, 0x01, 0x68, 0xCE];
//! let config = ScanConfig::default();
//! let scanner = NalScanner::new(stream, &config).unwrap();
//! for unit in scanner {
//!     let unit = unit.unwrap();
//!     println!("#{} type={:?}", unit.index, NalSyntax::H264.classify(&unit.data));
//! }
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `nalscan-core` | 错误类型与码流缓冲区 |
//! | `nalscan-codec` | NAL 头部分类, 名称表, 排除集合 |
//! | `nalscan-format` | Annex-B 分帧与扫描循环 |

/// 错误类型与码流缓冲区
pub use nalscan_core as core;

/// NAL 头部分类
pub use nalscan_codec as codec;

/// Annex-B 分帧与输入
pub use nalscan_format as format;

/// 获取 nalscan 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
