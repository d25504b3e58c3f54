//! Novel Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Chapter;
use crate::domain::chapterizer::chapterize;

/// ChapterSet 聚合根 - 一本小说解析后的有序章节集
///
/// 不变量:
/// - 章节顺序与其在原文中出现的顺序一致，创建后不可变
/// - 作为缓存单元整体读取，允许并发只读访问
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterSet {
    chapters: Vec<Chapter>,
    resolved_at: DateTime<Utc>,
}

impl ChapterSet {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters,
            resolved_at: Utc::now(),
        }
    }

    /// 从解码后的原始正文切分章节并创建章节集
    pub fn from_text(text: &str) -> Self {
        Self::new(chapterize(text))
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// 按标题精确查找章节，返回章节下标
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.title() == title)
    }

    pub fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_preserves_order() {
        let text = "第一章 开端\n 正文一\n             第二章 再起\n 正文二";
        let set = ChapterSet::from_text(text);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().title(), "第一章 开端");
        assert_eq!(set.get(1).unwrap().title(), "第二章 再起");
    }

    #[test]
    fn test_position_of_matches_exact_title() {
        let text = "第一章 开端\n 正文一\n             第二章 再起\n 正文二";
        let set = ChapterSet::from_text(text);

        assert_eq!(set.position_of("第二章 再起"), Some(1));
        assert_eq!(set.position_of("第二章"), None);
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let set = ChapterSet::from_text("");
        assert!(set.is_empty());
    }
}
