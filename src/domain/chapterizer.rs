//! 章节切分器
//!
//! 将解码后的小说正文按归档格式的排版惯例切分为有序章节。
//! 分隔符是标题行与正文行的前导空格缩进，按字面匹配；
//! 畸形的块被逐块跳过，整本书不会因此失败。

use super::novel::Chapter;

/// 章节边界分隔符：换行 + 13 个空格
///
/// 格式假设：观测到的归档惯例中章节标题行以 13 个空格缩进。
/// 必须按字面匹配，不做"更聪明"的识别。
pub const CHAPTER_SEPARATOR: &str = "\n             ";

/// 标题与正文的分隔符：换行 + 1 个空格（正文行缩进 1 个空格）
pub const TITLE_SEPARATOR: &str = "\n ";

/// 源文本中用作视觉缩进的全角空格
const FULLWIDTH_SPACE: char = '\u{3000}';

/// 将原始正文切分为有序章节
///
/// 永不失败：畸形的块被逐块跳过，只有完全空白的输入才返回空列表。
/// 返回的章节顺序与块在规范化文本中出现的顺序一致。
pub fn chapterize(text: &str) -> Vec<Chapter> {
    let normalized = normalize(text);

    let mut chapters = Vec::new();
    for (index, block) in normalized.split(CHAPTER_SEPARATOR).enumerate() {
        match chapterize_block(index, block) {
            Some(chapter) => chapters.push(chapter),
            None => {
                tracing::warn!(block_index = index, "Dropped block without paragraphs");
            }
        }
    }

    tracing::debug!(chapters = chapters.len(), "Chapterized novel text");
    chapters
}

/// 规范化：去掉回车符和全角空格缩进
fn normalize(text: &str) -> String {
    text.replace('\r', "").replace(FULLWIDTH_SPACE, "")
}

/// 处理单个块；无法产出非空章节时返回 None
///
/// `index` 是该块在全部块中的 0 起始位置，用于合成缺失的标题。
fn chapterize_block(index: usize, block: &str) -> Option<Chapter> {
    let (title, body) = match block.split_once(TITLE_SEPARATOR) {
        Some((head, rest)) => (head.trim().to_string(), rest),
        // 没有可识别的标题/正文结构：合成标题，整块作为正文
        None => (format!("第{}章", index + 1), block),
    };

    let paragraphs = collect_paragraphs(body);
    if paragraphs.is_empty() {
        return None;
    }

    Chapter::new(title, paragraphs).ok()
}

/// 按行收集段落：逐行去除首尾空白并丢弃空行
fn collect_paragraphs(body: &str) -> Vec<String> {
    body.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
