//! NAL 头部解析器.

pub mod h264;
pub mod h265;
