//! Novel Queries

/// 列出书库中所有小说查询
#[derive(Debug, Clone)]
pub struct ListNovels;

/// 获取小说章节目录查询
#[derive(Debug, Clone)]
pub struct GetNovelChapters {
    /// 未经校验的原始小说名
    pub name: String,
}

/// 获取单个章节正文查询
#[derive(Debug, Clone)]
pub struct GetChapter {
    /// 未经校验的原始小说名
    pub name: String,
    /// 章节标题，与目录中的标题精确匹配
    pub chapter_title: String,
}
