//! Novel Context - Value Objects

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::NovelNameError;

/// 小说名称的最大字符数
const MAX_NAME_CHARS: usize = 100;

/// 名称中禁止出现的字符：在路径、URL 或 HTML 上下文中有特殊含义
const FORBIDDEN_CHARS: &[char] = &['<', '>', '"', '\'', '&', '/', '\\', '|', '?', '*'];

/// 小说名称
///
/// 外部传入的名称在触达文件系统或缓存之前必须先通过这里的校验。
/// 校验是纯函数：无 I/O、无共享状态、相同输入结果确定。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NovelName(String);

impl NovelName {
    pub fn new(name: impl Into<String>) -> Result<Self, NovelNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NovelNameError::Empty);
        }
        let char_count = name.chars().count();
        if char_count > MAX_NAME_CHARS {
            return Err(NovelNameError::TooLong(char_count));
        }
        if let Some(ch) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(NovelNameError::ForbiddenChar(ch));
        }
        Ok(Self(name))
    }

    /// 名称是否合法（便捷判断，不关心具体原因）
    pub fn is_valid(name: &str) -> bool {
        Self::new(name).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NovelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 压缩包路径
///
/// 由小说库扫描得到的规范化路径，作为缓存 key 使用；
/// 请求方提供的原始字符串不允许直接构造。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchivePath(PathBuf);

impl ArchivePath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_name_accepted() {
        assert!(NovelName::new("Normal Title").is_ok());
        assert!(NovelName::new("斗破苍穹").is_ok());
        assert!(NovelName::is_valid("Normal Title"));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(NovelName::new(""), Err(NovelNameError::Empty));
        assert_eq!(NovelName::new("   "), Err(NovelNameError::Empty));
        assert!(!NovelName::is_valid(""));
    }

    #[test]
    fn test_path_characters_rejected() {
        assert_eq!(
            NovelName::new("a/b"),
            Err(NovelNameError::ForbiddenChar('/'))
        );
        assert_eq!(
            NovelName::new("a\\b"),
            Err(NovelNameError::ForbiddenChar('\\'))
        );
        assert_eq!(
            NovelName::new("..\\etc"),
            Err(NovelNameError::ForbiddenChar('\\'))
        );
    }

    #[test]
    fn test_markup_characters_rejected() {
        for raw in ["<script>", "a>b", "a\"b", "a'b", "a&b", "a|b", "a?b", "a*b"] {
            assert!(NovelName::new(raw).is_err(), "应当拒绝: {raw}");
        }
    }

    #[test]
    fn test_length_limit_counts_chars_not_bytes() {
        // 100 个汉字是 300 字节，但仍在字符数限制内
        let cjk = "书".repeat(100);
        assert!(NovelName::new(cjk).is_ok());

        let too_long = "书".repeat(101);
        assert_eq!(NovelName::new(too_long), Err(NovelNameError::TooLong(101)));
    }
}
