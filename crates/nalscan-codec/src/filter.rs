//! 排除集合: 命中的类型照常计数, 但不输出.
//!
//! 列表条目允许两侧带空白 (`"8, 1"`), 其余无法解析的条目忽略.

use std::collections::BTreeSet;

/// 需要排除输出的类型编号集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet {
    types: BTreeSet<u8>,
}

impl ExcludeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从逗号分隔列表解析 (如 "1,5,9")
    ///
    /// 条目两侧的空白先去掉再解析, 因此 "8, 1" 同时排除 8 和 1.
    /// 去掉空白后仍无法解析为 0..=255 整数的条目直接忽略.
    pub fn parse(list: &str) -> Self {
        let mut set = Self::new();
        for entry in list.split(',') {
            let entry = entry.trim();
            match entry.parse::<u8>() {
                Ok(type_id) => set.insert(type_id),
                Err(_) if entry.is_empty() => {}
                Err(_) => log::debug!("忽略无法解析的排除项: {:?}", entry),
            }
        }
        set
    }

    pub fn insert(&mut self, type_id: u8) {
        self.types.insert(type_id);
    }

    /// 类型是否被排除
    pub fn contains(&self, type_id: u8) -> bool {
        self.types.contains(&type_id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.types.iter().copied()
    }
}

impl FromIterator<u8> for ExcludeSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let set = ExcludeSet::parse("1,5,9");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 5, 9]);
        assert!(set.contains(5));
        assert!(!set.contains(7));
    }

    #[test]
    fn test_parse_ignore_invalid_entries() {
        let set = ExcludeSet::parse("1,abc,,-2,300, 6 ,7x");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 6]);
    }

    #[test]
    fn test_parse_accepts_surrounding_whitespace() {
        let set = ExcludeSet::parse("8, 1");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 8]);
        assert!(ExcludeSet::parse(" 5\t").contains(5));
        // 数字中间的空白仍视为无效
        assert!(ExcludeSet::parse("1 2").is_empty());
    }

    #[test]
    fn test_parse_empty() {
        assert!(ExcludeSet::parse("").is_empty());
        assert!(ExcludeSet::default().is_empty());
    }

    #[test]
    fn test_from_iter_dedup() {
        let set: ExcludeSet = [1, 1, 6].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
