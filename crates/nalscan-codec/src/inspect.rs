//! 单元判定: 分类 -> 排除 -> 名称表.
//!
//! 排除与命名是两道独立的门: 只有未被排除且名称表中存在的类型才输出.

use crate::{ExcludeSet, NalSyntax, NameTable};

/// 单个 NAL 单元的判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition<'a> {
    /// 需要输出
    Report { type_id: u8, name: &'a str },
    /// 类型在排除集合中
    Excluded { type_id: u8 },
    /// 类型不在名称表中
    Unnamed { type_id: u8 },
    /// 空单元 (相邻起始码), 没有头部字节
    Empty,
}

impl Disposition<'_> {
    /// 类型编号 (空单元为 `None`)
    pub fn type_id(&self) -> Option<u8> {
        match self {
            Self::Report { type_id, .. }
            | Self::Excluded { type_id }
            | Self::Unnamed { type_id } => Some(*type_id),
            Self::Empty => None,
        }
    }

    pub fn is_report(&self) -> bool {
        matches!(self, Self::Report { .. })
    }
}

/// 单元判定器
#[derive(Debug, Clone)]
pub struct UnitInspector {
    syntax: NalSyntax,
    exclude: ExcludeSet,
    names: NameTable,
}

impl UnitInspector {
    pub fn new(syntax: NalSyntax, exclude: ExcludeSet, names: NameTable) -> Self {
        Self {
            syntax,
            exclude,
            names,
        }
    }

    /// 使用语法对应的内置名称表
    pub fn with_builtin_names(syntax: NalSyntax, exclude: ExcludeSet) -> Self {
        Self::new(syntax, exclude, NameTable::for_syntax(syntax))
    }

    pub fn syntax(&self) -> NalSyntax {
        self.syntax
    }

    /// 判定一个 NAL 单元 (不含起始码)
    pub fn inspect(&self, unit: &[u8]) -> Disposition<'_> {
        let Some(type_id) = self.syntax.classify(unit) else {
            return Disposition::Empty;
        };
        if self.exclude.contains(type_id) {
            return Disposition::Excluded { type_id };
        }
        match self.names.get(type_id) {
            Some(name) => Disposition::Report { type_id, name },
            None => Disposition::Unnamed { type_id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h264_inspector(exclude: &str) -> UnitInspector {
        UnitInspector::with_builtin_names(NalSyntax::H264, ExcludeSet::parse(exclude))
    }

    #[test]
    fn test_report_named_type() {
        let inspector = h264_inspector("");
        assert_eq!(
            inspector.inspect(&[0x67, 0x42]),
            Disposition::Report {
                type_id: 7,
                name: "sequence parameter set"
            }
        );
    }

    #[test]
    fn test_excluded_named_type_not_reported() {
        let inspector = h264_inspector("1");
        let verdict = inspector.inspect(&[0x01]);
        assert_eq!(verdict, Disposition::Excluded { type_id: 1 });
        assert!(!verdict.is_report());
    }

    #[test]
    fn test_unnamed_type_not_reported() {
        // AUD (9) 不在 H.264 名称表中, 即使未被排除也不输出
        let inspector = h264_inspector("");
        assert_eq!(inspector.inspect(&[0x09, 0xF0]), Disposition::Unnamed { type_id: 9 });
    }

    #[test]
    fn test_excluded_wins_over_unnamed() {
        let inspector = h264_inspector("9");
        assert_eq!(inspector.inspect(&[0x09]), Disposition::Excluded { type_id: 9 });
    }

    #[test]
    fn test_empty_unit() {
        let inspector = h264_inspector("");
        let verdict = inspector.inspect(&[]);
        assert_eq!(verdict, Disposition::Empty);
        assert_eq!(verdict.type_id(), None);
    }

    #[test]
    fn test_hevc_inspect() {
        let inspector = UnitInspector::with_builtin_names(NalSyntax::Hevc, ExcludeSet::new());
        assert_eq!(inspector.syntax(), NalSyntax::Hevc);
        assert_eq!(
            inspector.inspect(&[0x42, 0x01]),
            Disposition::Report {
                type_id: 33,
                name: "sequence parameter set"
            }
        );
        // 0x4E -> 39 (PREFIX_SEI), HEVC 名称表中没有
        assert_eq!(inspector.inspect(&[0x4E, 0x01]), Disposition::Unnamed { type_id: 39 });
    }
}
