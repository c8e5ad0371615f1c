//! H.265/HEVC NAL 头部类型识别.
//!
//! HEVC NAL 头部为 2 字节, nal_unit_type 位于第一个字节的 bit 1..=6:
//! - forbidden_zero_bit (1 bit)
//! - nal_unit_type (6 bits)
//! - nuh_layer_id (6 bits)
//! - nuh_temporal_id_plus1 (3 bits)
//!
//! 类型识别只依赖第一个字节.

/// 从 NAL 头部第一个字节提取 nal_unit_type
#[inline]
pub fn hevc_nal_type_id(header: u8) -> u8 {
    (header >> 1) & 0x3F
}

/// HEVC NAL 单元类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HevcNalUnitType {
    /// TRAIL_N (非参考尾随图像)
    TrailN,
    /// TRAIL_R (参考尾随图像)
    TrailR,
    TsaN,
    TsaR,
    StsaN,
    StsaR,
    RadlN,
    RadlR,
    RaslN,
    RaslR,
    /// BLA_W_LP (Broken Link Access)
    BlaWLp,
    BlaWRadl,
    BlaNLp,
    /// IDR_W_RADL (Instantaneous Decoding Refresh)
    IdrWRadl,
    IdrNLp,
    /// CRA_NUT (Clean Random Access)
    Cra,
    /// VPS (Video Parameter Set)
    Vps,
    /// SPS (Sequence Parameter Set)
    Sps,
    /// PPS (Picture Parameter Set)
    Pps,
    /// AUD (Access Unit Delimiter)
    Aud,
    /// EOS (End of Sequence)
    Eos,
    /// EOB (End of Bitstream)
    Eob,
    /// FD (Filler Data)
    FillerData,
    PrefixSei,
    SuffixSei,
    /// 保留或未定义类型
    Unknown(u8),
}

/// (类型编号, 类型, 名称) 对照表
const HEVC_TYPES: &[(u8, HevcNalUnitType, &str)] = &[
    (0, HevcNalUnitType::TrailN, "TRAIL_N"),
    (1, HevcNalUnitType::TrailR, "TRAIL_R"),
    (2, HevcNalUnitType::TsaN, "TSA_N"),
    (3, HevcNalUnitType::TsaR, "TSA_R"),
    (4, HevcNalUnitType::StsaN, "STSA_N"),
    (5, HevcNalUnitType::StsaR, "STSA_R"),
    (6, HevcNalUnitType::RadlN, "RADL_N"),
    (7, HevcNalUnitType::RadlR, "RADL_R"),
    (8, HevcNalUnitType::RaslN, "RASL_N"),
    (9, HevcNalUnitType::RaslR, "RASL_R"),
    (16, HevcNalUnitType::BlaWLp, "BLA_W_LP"),
    (17, HevcNalUnitType::BlaWRadl, "BLA_W_RADL"),
    (18, HevcNalUnitType::BlaNLp, "BLA_N_LP"),
    (19, HevcNalUnitType::IdrWRadl, "IDR_W_RADL"),
    (20, HevcNalUnitType::IdrNLp, "IDR_N_LP"),
    (21, HevcNalUnitType::Cra, "CRA_NUT"),
    (32, HevcNalUnitType::Vps, "VPS"),
    (33, HevcNalUnitType::Sps, "SPS"),
    (34, HevcNalUnitType::Pps, "PPS"),
    (35, HevcNalUnitType::Aud, "AUD"),
    (36, HevcNalUnitType::Eos, "EOS"),
    (37, HevcNalUnitType::Eob, "EOB"),
    (38, HevcNalUnitType::FillerData, "FD"),
    (39, HevcNalUnitType::PrefixSei, "PREFIX_SEI"),
    (40, HevcNalUnitType::SuffixSei, "SUFFIX_SEI"),
];

impl HevcNalUnitType {
    /// 从类型编号创建
    pub fn from_type_id(id: u8) -> Self {
        HEVC_TYPES
            .iter()
            .find(|(type_id, _, _)| *type_id == id)
            .map(|(_, nal_type, _)| *nal_type)
            .unwrap_or(Self::Unknown(id))
    }

    /// 获取类型编号
    pub fn type_id(&self) -> u8 {
        if let Self::Unknown(id) = self {
            return *id;
        }
        HEVC_TYPES
            .iter()
            .find(|(_, nal_type, _)| nal_type == self)
            .map(|(type_id, _, _)| *type_id)
            .unwrap_or_default()
    }

    /// 是否为 VCL (Video Coding Layer) NAL
    pub fn is_vcl(&self) -> bool {
        self.type_id() < 32
    }

    /// 是否为 IRAP (Intra Random Access Point) NAL
    pub fn is_irap(&self) -> bool {
        matches!(self.type_id(), 16..=21)
    }
}

impl std::fmt::Display for HevcNalUnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match HEVC_TYPES.iter().find(|(_, nal_type, _)| nal_type == self) {
            Some((_, _, name)) => f.write_str(name),
            None => write!(f, "Unknown({})", self.type_id()),
        }
    }
}
