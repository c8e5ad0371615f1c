//! NAL 头部语法选择与类型分类.

use crate::parsers::h264::{NalUnitType, nal_type_id};
use crate::parsers::h265::{HevcNalUnitType, hevc_nal_type_id};

/// NAL 头部语法 (决定类型编号的位布局)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NalSyntax {
    /// H.264/AVC: type = header & 0x1F
    #[default]
    H264,
    /// H.265/HEVC: type = (header >> 1) & 0x3F
    Hevc,
}

impl NalSyntax {
    /// 按模式开关选择语法
    pub fn from_hevc_flag(hevc: bool) -> Self {
        if hevc { Self::Hevc } else { Self::H264 }
    }

    /// 从 NAL 单元数据 (不含起始码) 提取类型编号
    ///
    /// 任意头部字节都能得到确定的类型编号; 空单元没有头部, 返回 `None`.
    pub fn classify(&self, unit: &[u8]) -> Option<u8> {
        let &header = unit.first()?;
        Some(match self {
            Self::H264 => nal_type_id(header),
            Self::Hevc => hevc_nal_type_id(header),
        })
    }

    /// 类型编号的简称 (用于统计日志)
    pub fn type_label(&self, type_id: u8) -> String {
        match self {
            Self::H264 => NalUnitType::from_type_id(type_id).to_string(),
            Self::Hevc => HevcNalUnitType::from_type_id(type_id).to_string(),
        }
    }

    /// 类型编号是否属于 VCL
    pub fn is_vcl(&self, type_id: u8) -> bool {
        match self {
            Self::H264 => NalUnitType::from_type_id(type_id).is_vcl(),
            Self::Hevc => HevcNalUnitType::from_type_id(type_id).is_vcl(),
        }
    }

    /// 类型编号是否为关键帧 (H.264 IDR, HEVC IRAP)
    pub fn is_keyframe(&self, type_id: u8) -> bool {
        match self {
            Self::H264 => NalUnitType::from_type_id(type_id).is_idr(),
            Self::Hevc => HevcNalUnitType::from_type_id(type_id).is_irap(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::H264 => "h264",
            Self::Hevc => "hevc",
        }
    }
}

impl std::fmt::Display for NalSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
