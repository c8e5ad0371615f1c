//! NAL 单元扫描循环.
//!
//! 持有输入源与工作缓冲区, 反复调用 [`AnnexBFramer`]:
//! 需要更多数据时读取输入, 得到单元时按顺序编号后返回.

use std::io::{self, Read};

use bytes::Bytes;
use nalscan_core::{NalError, NalResult, StreamBuffer};

use crate::annexb::{AnnexBFramer, FrameStep};
use crate::config::ScanConfig;

/// 扫描得到的 NAL 单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedUnit {
    /// 序号 (从 0 开始, 每个单元加一, 与是否输出无关)
    pub index: u64,
    /// 单元数据 (不含起始码)
    pub data: Bytes,
}

impl ScannedUnit {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// NAL 单元扫描器
pub struct NalScanner<R> {
    reader: R,
    buffer: StreamBuffer,
    framer: AnnexBFramer,
    /// 读取用临时缓冲
    chunk: Vec<u8>,
    next_index: u64,
    /// 输入源已读完
    at_end: bool,
    /// 已结束 (正常结束或出错)
    finished: bool,
}

impl<R: Read> NalScanner<R> {
    /// 创建扫描器, 配置非法时返回 `InvalidArgument`
    pub fn new(reader: R, config: &ScanConfig) -> NalResult<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            buffer: StreamBuffer::new(config.read_chunk_size, config.max_unit_size),
            framer: AnnexBFramer::new().with_flush_tail(config.flush_tail),
            chunk: vec![0u8; config.read_chunk_size],
            next_index: 0,
            at_end: false,
            finished: false,
        })
    }

    /// 已产生的单元数
    pub fn units_scanned(&self) -> u64 {
        self.next_index
    }

    /// 取回输入源
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// 读取下一个完整的 NAL 单元
    ///
    /// 输入结束时返回 `Ok(None)`. 出错后扫描器不再产生单元.
    pub fn next_unit(&mut self) -> NalResult<Option<ScannedUnit>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            match self.framer.step(self.buffer.as_slice(), self.at_end) {
                FrameStep::Skip(n) => {
                    log::debug!("跳过起始码之前的 {} 字节", n);
                    self.buffer.discard(n);
                }
                FrameStep::Unit { advance, range } => {
                    let consumed = self.buffer.take_prefix(advance);
                    let unit = ScannedUnit {
                        index: self.next_index,
                        data: consumed.slice(range),
                    };
                    if unit.is_empty() {
                        log::debug!("单元 #{} 为空 (相邻起始码)", unit.index);
                    }
                    self.next_index += 1;
                    return Ok(Some(unit));
                }
                FrameStep::NeedMoreInput if self.at_end => {
                    if !self.buffer.is_empty() {
                        log::debug!(
                            "输入结束, 丢弃末尾 {} 字节 (没有后续起始码)",
                            self.buffer.len()
                        );
                    }
                    self.finished = true;
                    return Ok(None);
                }
                FrameStep::NeedMoreInput => {
                    if let Err(e) = self.fill() {
                        self.finished = true;
                        return Err(e);
                    }
                }
            }
        }
    }

    /// 从输入源追加一次数据
    fn fill(&mut self) -> NalResult<()> {
        if self.buffer.is_full() {
            return Err(NalError::UnitTooLarge {
                limit: self.buffer.max_size(),
            });
        }

        let want = self.chunk.len().min(self.buffer.remaining());
        let n = loop {
            match self.reader.read(&mut self.chunk[..want]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(NalError::ReadFailure(e)),
            }
        };

        if n == 0 {
            log::trace!("输入源已读完");
            self.at_end = true;
            return Ok(());
        }
        log::trace!("读取 {} 字节, 缓冲 {} 字节", n, self.buffer.len() + n);
        self.buffer.append(&self.chunk[..n])
    }
}

impl<R: Read> Iterator for NalScanner<R> {
    type Item = NalResult<ScannedUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_unit().transpose()
    }
}
