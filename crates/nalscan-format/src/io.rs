//! 输入源.
//!
//! 命令行最多接受一个输入文件; 未指定时读取标准输入.

use std::fs::File;
use std::io::{self, Read};

use nalscan_core::{NalError, NalResult};

/// 字节输入源
#[derive(Debug)]
pub enum InputSource {
    /// 标准输入
    Stdin(io::Stdin),
    /// 已打开的文件
    File { path: String, file: File },
}

impl InputSource {
    /// 标准输入
    pub fn stdin() -> Self {
        Self::Stdin(io::stdin())
    }

    /// 以只读方式打开文件
    pub fn open_file(path: &str) -> NalResult<Self> {
        let file = File::open(path).map_err(|source| NalError::InputOpenFailed {
            path: path.to_string(),
            source,
        })?;
        log::debug!("已打开输入文件: {}", path);
        Ok(Self::File {
            path: path.to_string(),
            file,
        })
    }

    /// 按位置参数选择输入: 0 个读标准输入, 1 个打开文件, 更多则报错
    pub fn from_args(args: &[String]) -> NalResult<Self> {
        match args {
            [] => Ok(Self::stdin()),
            [path] => Self::open_file(path),
            _ => Err(NalError::TooManyArguments(args.len())),
        }
    }

    /// 是否为标准输入
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin(_))
    }

    /// 用于日志的输入名称
    pub fn name(&self) -> &str {
        match self {
            Self::Stdin(_) => "<stdin>",
            Self::File { path, .. } => path,
        }
    }
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(stdin) => stdin.read(buf),
            Self::File { file, .. } => file.read(buf),
        }
    }
}
