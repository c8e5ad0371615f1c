//! H.265/HEVC NAL 头部解析.
//!
//! # HEVC NAL 头部 (2 字节)
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ forbidden(1) | type(6) | layer_id(6) | tid(3) │
//! └───────────────────────────────────────────────┘
//! ```

pub mod nal;

pub use nal::{HevcNalUnitType, hevc_nal_type_id};
