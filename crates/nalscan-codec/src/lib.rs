//! # nalscan-codec
//!
//! NAL 单元头部分类相关类型:
//!
//! - [`NalSyntax`]: H.264 / HEVC 两种头部位布局的类型提取
//! - [`NameTable`]: 类型编号到显示名称的映射
//! - [`ExcludeSet`]: 排除输出的类型集合
//! - [`UnitInspector`]: 分类 + 排除 + 命名的组合判定
//! - [`parsers`]: H.264 / HEVC NAL 类型枚举

pub mod filter;
pub mod inspect;
pub mod names;
pub mod parsers;
pub mod syntax;

// 重导出常用类型
pub use filter::ExcludeSet;
pub use inspect::{Disposition, UnitInspector};
pub use names::NameTable;
pub use syntax::NalSyntax;
