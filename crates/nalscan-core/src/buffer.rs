//! 有上限的码流工作缓冲区.
//!
//! 只暴露两类操作: 尾部追加 (`append`) 与头部丢弃 (`discard` / `take_prefix`).
//! 缓冲区总长度不会超过创建时指定的上限.

use bytes::{Buf, Bytes, BytesMut};

use crate::{NalError, NalResult};

/// 码流工作缓冲区
#[derive(Debug)]
pub struct StreamBuffer {
    /// 尚未消费的字节
    data: BytesMut,
    /// 允许缓冲的最大字节数
    max_size: usize,
}

impl StreamBuffer {
    /// 创建缓冲区
    ///
    /// - `initial_capacity`: 初始预分配大小 (不超过 `max_size`)
    /// - `max_size`: 缓冲上限
    pub fn new(initial_capacity: usize, max_size: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(initial_capacity.min(max_size)),
            max_size,
        }
    }

    /// 缓冲上限
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// 当前缓冲字节数
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 是否已达到上限
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.max_size
    }

    /// 距离上限还可追加的字节数
    pub fn remaining(&self) -> usize {
        self.max_size.saturating_sub(self.data.len())
    }

    /// 当前缓冲内容
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// 追加数据, 超过上限时返回 `UnitTooLarge` 且不修改缓冲区
    pub fn append(&mut self, chunk: &[u8]) -> NalResult<()> {
        if chunk.len() > self.remaining() {
            return Err(NalError::UnitTooLarge {
                limit: self.max_size,
            });
        }
        self.data.extend_from_slice(chunk);
        Ok(())
    }

    /// 丢弃头部 `n` 字节 (超出长度时丢弃全部)
    pub fn discard(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data.advance(n);
    }

    /// 取出头部 `n` 字节 (零拷贝), 超出长度时取出全部
    pub fn take_prefix(&mut self, n: usize) -> Bytes {
        let n = n.min(self.data.len());
        self.data.split_to(n).freeze()
    }
}
