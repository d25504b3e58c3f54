//! Novel Context - Entities

use serde::{Deserialize, Serialize};

/// 章节 - 展示与导航的最小单位
///
/// 不变量:
/// - paragraphs 非空，且每个段落都是去除首尾空白后的非空行
/// - title 在同一本小说内作为导航 key 使用；唯一性由源文本决定，
///   切分器无法对畸形输入做出保证
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 章节标题
    title: String,
    /// 正文段落（按原文顺序）
    paragraphs: Vec<String>,
}

impl Chapter {
    pub fn new(title: String, paragraphs: Vec<String>) -> Result<Self, &'static str> {
        if paragraphs.is_empty() {
            return Err("章节段落不能为空");
        }
        Ok(Self { title, paragraphs })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }
}
