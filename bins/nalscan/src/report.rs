//! 扫描结果输出.
//!
//! 每个需要输出的单元写一行:
//! - 文本: `序号\t类型\t长度\t名称`, 读取标准输入时前面多一列耗时 (秒)
//! - JSON Lines: 每行一个对象, 字段同上

use std::io::Write;
use std::time::Instant;

use serde::Serialize;

use nalscan_codec::{Disposition, UnitInspector};
use nalscan_core::{NalError, NalResult};
use nalscan_format::ScannedUnit;

use crate::summary::ScanSummary;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// JSON 输出记录
#[derive(Serialize)]
struct UnitRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed: Option<f64>,
    index: u64,
    #[serde(rename = "type")]
    type_id: u8,
    size: usize,
    name: &'a str,
}

/// 单元输出器
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    inspector: UnitInspector,
    /// 计时起点, 仅读取标准输入时设置
    start: Option<Instant>,
    summary: ScanSummary,
}

impl<W: Write> Reporter<W> {
    pub fn new(
        out: W,
        inspector: UnitInspector,
        format: OutputFormat,
        start: Option<Instant>,
    ) -> Self {
        Self {
            out,
            format,
            inspector,
            start,
            summary: ScanSummary::default(),
        }
    }

    /// 判定并 (在需要时) 输出一个单元
    pub fn handle(&mut self, unit: &ScannedUnit) -> NalResult<()> {
        let disposition = self.inspector.inspect(&unit.data);
        self.summary.record(unit.len(), &disposition);

        match disposition {
            Disposition::Report { type_id, name } => {
                let elapsed = self.start.map(|start| start.elapsed().as_secs_f64());
                write_record(
                    &mut self.out,
                    self.format,
                    &UnitRecord {
                        elapsed,
                        index: unit.index,
                        type_id,
                        size: unit.len(),
                        name,
                    },
                )
                .map_err(NalError::OutputFailed)
            }
            other => {
                tracing::trace!("单元 #{} 不输出: {:?}", unit.index, other);
                Ok(())
            }
        }
    }

    /// 刷新输出并返回统计
    pub fn finish(mut self) -> NalResult<ScanSummary> {
        self.out.flush().map_err(NalError::OutputFailed)?;
        Ok(self.summary)
    }
}

fn write_record<W: Write>(
    out: &mut W,
    format: OutputFormat,
    record: &UnitRecord<'_>,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(elapsed) = record.elapsed {
                write!(out, "{elapsed:.6}\t")?;
            }
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                record.index, record.type_id, record.size, record.name
            )
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)
        }
    }
}
