//! NAL 类型名称表.
//!
//! 只有名称表中存在的类型才会被输出. 名称表是普通的值,
//! 由调用方按语法选择后传给输出模块.

use std::collections::BTreeMap;

use crate::NalSyntax;

/// H.264 内置名称表
const H264_NAMES: &[(u8, &str)] = &[
    (1, "non-idr coded picture"),
    (5, "    idr coded picture"),
    (6, "supplemental enhancement information"),
    (7, "sequence parameter set"),
    (8, "picture parameter set"),
];

/// HEVC 内置名称表
const HEVC_NAMES: &[(u8, &str)] = &[
    (1, "TRAIL_R"),
    (19, "IDR_W_RADL"),
    (32, "video parameter set"),
    (33, "sequence parameter set"),
    (34, "picture parameter set"),
];

/// 类型编号 -> 显示名称
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: BTreeMap<u8, String>,
}

impl NameTable {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// H.264 内置表
    pub fn h264() -> Self {
        H264_NAMES.iter().copied().collect()
    }

    /// HEVC 内置表
    pub fn hevc() -> Self {
        HEVC_NAMES.iter().copied().collect()
    }

    /// 按语法选择内置表
    pub fn for_syntax(syntax: NalSyntax) -> Self {
        match syntax {
            NalSyntax::H264 => Self::h264(),
            NalSyntax::Hevc => Self::hevc(),
        }
    }

    /// 添加或替换一个条目
    pub fn insert(&mut self, type_id: u8, name: impl Into<String>) {
        self.entries.insert(type_id, name.into());
    }

    /// 查找名称, 不存在时返回 `None`
    pub fn get(&self, type_id: u8) -> Option<&str> {
        self.entries.get(&type_id).map(String::as_str)
    }

    pub fn contains(&self, type_id: u8) -> bool {
        self.entries.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(u8, S)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (u8, S)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(type_id, name)| (type_id, name.into()))
                .collect(),
        }
    }
}
