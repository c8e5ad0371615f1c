//! Annex-B 字节流分帧器.
//!
//! 分帧器只检查调用方给出的缓冲数据, 不做任何 I/O. 每次调用返回一步动作:
//!
//! 1. 查找第一个起始码 `00 00 01`:
//!    - 找不到, 或缓冲区恰好只有起始码: 需要更多数据 (缓冲区全部保留)
//!    - 位于偏移 k > 0: 丢弃前 k 个字节 (起始码之前的垃圾数据)
//! 2. 起始码位于偏移 0 时, 从偏移 3 开始查找第二个起始码:
//!    - 找不到: 需要更多数据
//!    - 位于偏移 p: 单元为 `[3, p - 1)`, 前进 p 字节
//!
//! 第二个起始码之前的一个字节不计入单元 (通常是 4 字节起始码的首个 0x00).
//! 4 字节起始码 `00 00 00 01` 以其尾部的 3 字节匹配.
//!
//! ```text
//! 00 00 01 67 AA 00 | 00 00 01 68 BB | 00 00 01
//!          └─┬─┘  ×           └┘  ×
//!          单元 0             单元 1
//! ```

use std::ops::Range;

/// 3 字节起始码
pub const START_CODE: [u8; 3] = [0x00, 0x00, 0x01];

/// 分帧器的一步动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameStep {
    /// 需要追加更多数据后再调用
    NeedMoreInput,
    /// 丢弃头部 n 字节, 不产生单元
    Skip(usize),
    /// 产生一个单元: `range` 为单元在当前缓冲中的位置, 之后丢弃头部 `advance` 字节
    Unit { advance: usize, range: Range<usize> },
}

/// Annex-B 分帧器
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnexBFramer {
    /// 流结束时是否输出最后一个 (没有后续起始码的) 单元
    flush_tail: bool,
}

impl AnnexBFramer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置流结束时是否输出末尾单元
    pub fn with_flush_tail(mut self, flush_tail: bool) -> Self {
        self.flush_tail = flush_tail;
        self
    }

    pub fn flush_tail(&self) -> bool {
        self.flush_tail
    }

    /// 对当前缓冲数据执行一步分帧
    ///
    /// `at_end` 表示输入源已经读完, 之后不会再有数据追加.
    pub fn step(&self, data: &[u8], at_end: bool) -> FrameStep {
        let Some(first) = find_start_code(data, 0) else {
            return FrameStep::NeedMoreInput;
        };
        if first > 0 {
            return FrameStep::Skip(first);
        }

        let payload_start = START_CODE.len();
        if data.len() == payload_start {
            return FrameStep::NeedMoreInput;
        }

        match find_start_code(data, payload_start) {
            Some(next) => FrameStep::Unit {
                advance: next,
                // 相邻起始码之间没有数据时得到空单元
                range: payload_start..(next - 1).max(payload_start),
            },
            None if at_end && self.flush_tail => FrameStep::Unit {
                advance: data.len(),
                range: payload_start..data.len(),
            },
            None => FrameStep::NeedMoreInput,
        }
    }
}

/// 从 `from` 开始查找起始码, 返回起始码第一个字节的偏移
pub fn find_start_code(data: &[u8], from: usize) -> Option<usize> {
    let mut i = from.checked_add(2)?;
    while i < data.len() {
        match data[i] {
            0x01 if data[i - 1] == 0x00 && data[i - 2] == 0x00 => return Some(i - 2),
            // 结束于 i + 1 或 i + 2 的起始码都要求 data[i] == 0
            0x00 => i += 1,
            _ => i += 3,
        }
    }
    None
}
