//! H.264/AVC NAL 头部解析.
//!
//! - 1 字节 NAL 头, nal_unit_type 为低 5 位
//! - 类型编号映射到类型枚举

pub mod nal;

pub use nal::{NAL_TYPE_MASK, NalUnitType, nal_type_id};
