//! H.264 NAL 头部类型识别.
//!
//! # NAL 头部 (1 字节)
//! ```text
//! ┌─────────────────────────────────────┐
//! │ forbidden(1) | ref_idc(2) | type(5) │
//! └─────────────────────────────────────┘
//! ```
//!
//! 只读取头部字节, 不校验 forbidden_zero_bit, 不处理 RBSP.

/// nal_unit_type 掩码 (低 5 位)
pub const NAL_TYPE_MASK: u8 = 0x1F;

/// 从 NAL 头部字节提取 nal_unit_type
#[inline]
pub fn nal_type_id(header: u8) -> u8 {
    header & NAL_TYPE_MASK
}

/// NAL 单元类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NalUnitType {
    /// 非 IDR 图像切片 (P/B slice)
    Slice,
    /// 数据分区 A (DPA)
    SliceDpa,
    /// 数据分区 B (DPB)
    SliceDpb,
    /// 数据分区 C (DPC)
    SliceDpc,
    /// IDR 图像切片 (关键帧)
    SliceIdr,
    /// 增补增强信息 (SEI)
    Sei,
    /// 序列参数集 (SPS)
    Sps,
    /// 图像参数集 (PPS)
    Pps,
    /// 访问单元分隔符 (AUD)
    Aud,
    /// 序列结束
    EndOfSequence,
    /// 流结束
    EndOfStream,
    /// 填充数据
    FillerData,
    /// SPS 扩展
    SpsExtension,
    /// 未知或保留类型
    Unknown(u8),
}

impl NalUnitType {
    /// 从 NAL 类型编号创建
    pub fn from_type_id(type_id: u8) -> Self {
        match type_id {
            1 => Self::Slice,
            2 => Self::SliceDpa,
            3 => Self::SliceDpb,
            4 => Self::SliceDpc,
            5 => Self::SliceIdr,
            6 => Self::Sei,
            7 => Self::Sps,
            8 => Self::Pps,
            9 => Self::Aud,
            10 => Self::EndOfSequence,
            11 => Self::EndOfStream,
            12 => Self::FillerData,
            13 => Self::SpsExtension,
            _ => Self::Unknown(type_id),
        }
    }

    /// 是否为 VCL (Video Coding Layer) NAL
    pub fn is_vcl(&self) -> bool {
        matches!(
            self,
            Self::Slice | Self::SliceDpa | Self::SliceDpb | Self::SliceDpc | Self::SliceIdr
        )
    }

    /// 是否为关键帧 (IDR)
    pub fn is_idr(&self) -> bool {
        matches!(self, Self::SliceIdr)
    }
}

impl std::fmt::Display for NalUnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Slice => "Slice",
            Self::SliceDpa => "SliceDPA",
            Self::SliceDpb => "SliceDPB",
            Self::SliceDpc => "SliceDPC",
            Self::SliceIdr => "IDR",
            Self::Sei => "SEI",
            Self::Sps => "SPS",
            Self::Pps => "PPS",
            Self::Aud => "AUD",
            Self::EndOfSequence => "EndOfSeq",
            Self::EndOfStream => "EndOfStream",
            Self::FillerData => "Filler",
            Self::SpsExtension => "SPSExt",
            Self::Unknown(id) => return write!(f, "Unknown({id})"),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nal_type_id_low_five_bits() {
        // 0b0_11_00111 = 0x67 -> SPS
        assert_eq!(nal_type_id(0x67), 7);
        assert_eq!(nal_type_id(0x68), 8);
        assert_eq!(nal_type_id(0x65), 5);
        assert_eq!(nal_type_id(0x41), 1);
        // forbidden 位不参与, 也不校验
        assert_eq!(nal_type_id(0xE7), 7);
        assert_eq!(nal_type_id(0xFF), 31);
    }

    #[test]
    fn test_nal_type_from_type_id() {
        assert_eq!(NalUnitType::from_type_id(nal_type_id(0x67)), NalUnitType::Sps);
        assert_eq!(NalUnitType::from_type_id(6), NalUnitType::Sei);
        assert_eq!(NalUnitType::from_type_id(30), NalUnitType::Unknown(30));
    }

    #[test]
    fn test_nal_type_property() {
        assert!(NalUnitType::SliceIdr.is_vcl());
        assert!(NalUnitType::SliceIdr.is_idr());
        assert!(NalUnitType::Slice.is_vcl());
        assert!(!NalUnitType::Slice.is_idr());
        assert!(!NalUnitType::Sps.is_vcl());
    }

    #[test]
    fn test_nal_type_display() {
        assert_eq!(NalUnitType::Sps.to_string(), "SPS");
        assert_eq!(NalUnitType::Unknown(0).to_string(), "Unknown(0)");
    }
}
