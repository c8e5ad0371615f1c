//! 扫描统计.

use std::collections::BTreeMap;

use nalscan_codec::{Disposition, NalSyntax};

/// 一次扫描的统计结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// 单元总数 (含被排除和未命名的)
    pub units: u64,
    /// 单元数据总字节数 (不含起始码)
    pub bytes: u64,
    /// 已输出的单元数
    pub reported: u64,
    /// 被排除的单元数
    pub excluded: u64,
    /// 空单元数
    pub empty: u64,
    /// 各类型单元数
    pub per_type: BTreeMap<u8, u64>,
}

impl ScanSummary {
    /// 记录一个单元
    pub fn record(&mut self, len: usize, disposition: &Disposition<'_>) {
        self.units += 1;
        self.bytes += len as u64;
        match disposition {
            Disposition::Report { .. } => self.reported += 1,
            Disposition::Excluded { .. } => self.excluded += 1,
            Disposition::Empty => self.empty += 1,
            Disposition::Unnamed { .. } => {}
        }
        if let Some(type_id) = disposition.type_id() {
            *self.per_type.entry(type_id).or_default() += 1;
        }
    }

    /// VCL 单元数
    pub fn vcl_units(&self, syntax: NalSyntax) -> u64 {
        self.per_type
            .iter()
            .filter(|(type_id, _)| syntax.is_vcl(**type_id))
            .map(|(_, count)| *count)
            .sum()
    }

    /// 关键帧单元数
    pub fn keyframe_units(&self, syntax: NalSyntax) -> u64 {
        self.per_type
            .iter()
            .filter(|(type_id, _)| syntax.is_keyframe(**type_id))
            .map(|(_, count)| *count)
            .sum()
    }

    /// 输出统计日志
    pub fn log(&self, syntax: NalSyntax) {
        tracing::info!(
            "扫描完成: {} 个单元, {} 字节, 输出 {}, 排除 {}, 空单元 {}, VCL {}, 关键帧 {}",
            self.units,
            self.bytes,
            self.reported,
            self.excluded,
            self.empty,
            self.vcl_units(syntax),
            self.keyframe_units(syntax)
        );
        for (type_id, count) in &self.per_type {
            tracing::info!(
                "  类型 {:2} ({}): {}",
                type_id,
                syntax.type_label(*type_id),
                count
            );
        }
    }
}
