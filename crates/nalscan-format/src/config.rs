//! 扫描配置.

use nalscan_codec::{ExcludeSet, NalSyntax};
use nalscan_core::{NalError, NalResult};

use crate::annexb::START_CODE;

/// 默认单次读取大小 (256 KB)
pub const DEFAULT_READ_CHUNK_SIZE: usize = 256 * 1024;

/// 默认单元缓冲上限 (8 MB)
pub const DEFAULT_MAX_UNIT_SIZE: usize = 8192 * 1024;

/// 扫描配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// NAL 头部语法
    pub syntax: NalSyntax,
    /// 不输出的类型
    pub exclude: ExcludeSet,
    /// 单次从输入源读取的最大字节数
    pub read_chunk_size: usize,
    /// 缓冲上限, 超过时报告 `UnitTooLarge`
    pub max_unit_size: usize,
    /// 流结束时输出最后一个没有后续起始码的单元
    pub flush_tail: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            syntax: NalSyntax::default(),
            exclude: ExcludeSet::default(),
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            max_unit_size: DEFAULT_MAX_UNIT_SIZE,
            flush_tail: false,
        }
    }
}

impl ScanConfig {
    /// 校验配置
    pub fn validate(&self) -> NalResult<()> {
        if self.read_chunk_size == 0 {
            return Err(NalError::InvalidArgument("读取大小必须大于 0".into()));
        }
        // 至少要能容纳一个起始码加一个字节
        if self.max_unit_size <= START_CODE.len() {
            return Err(NalError::InvalidArgument(format!(
                "单元缓冲上限过小: {}, 至少为 {}",
                self.max_unit_size,
                START_CODE.len() + 1
            )));
        }
        Ok(())
    }
}
