//! Novel Library - 文件系统书库实现
//!
//! 实现 NovelLibraryPort trait：扫描书库目录，解析小说名到压缩包路径。
//! 书库是只读的，目录内容变化在下一次扫描时自然生效。

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;

use crate::application::ports::{LibraryError, NovelLibraryPort, NovelSummary};
use crate::domain::novel::{ArchivePath, NovelName};

/// 来源站点在文件名中的固定尾缀，展示名中不保留
const SITE_SUFFIX: &str = "-飞卢小说网";

/// 文件系统书库
pub struct NovelLibrary {
    /// 书库目录
    novels_dir: PathBuf,
    /// 归档文件后缀（含点，如 ".zip"）
    archive_suffix: String,
}

impl NovelLibrary {
    pub fn new(novels_dir: impl Into<PathBuf>, archive_suffix: impl Into<String>) -> Self {
        Self {
            novels_dir: novels_dir.into(),
            archive_suffix: archive_suffix.into(),
        }
    }

    /// 归档文件名 → 展示名
    fn display_name(&self, file_name: &str) -> String {
        let stem = file_name
            .strip_suffix(&self.archive_suffix)
            .unwrap_or(file_name);
        stem.strip_suffix(SITE_SUFFIX).unwrap_or(stem).to_string()
    }

    /// 列出目录下所有归档文件名，排序保证扫描结果稳定
    ///
    /// 目录不存在视为空书库。
    async fn archive_file_names(&self) -> Result<Vec<String>, LibraryError> {
        let mut dir = match fs::read_dir(&self.novels_dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LibraryError::IoError(e.to_string())),
        };

        let mut names = Vec::new();
        loop {
            let entry = dir
                .next_entry()
                .await
                .map_err(|e| LibraryError::IoError(e.to_string()))?;
            let entry = match entry {
                Some(entry) => entry,
                None => break,
            };

            // 非 UTF-8 文件名无法作为小说名对外暴露，直接跳过
            if let Some(file_name) = entry.file_name().to_str() {
                if file_name.ends_with(&self.archive_suffix) {
                    names.push(file_name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl NovelLibraryPort for NovelLibrary {
    async fn list(&self) -> Result<Vec<NovelSummary>, LibraryError> {
        let mut summaries = Vec::new();
        for file_name in self.archive_file_names().await? {
            let path = self.novels_dir.join(&file_name);
            let modified = fs::metadata(&path)
                .await
                .ok()
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Utc>::from);

            summaries.push(NovelSummary {
                name: self.display_name(&file_name),
                file_name,
                modified,
            });
        }

        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(count = summaries.len(), "Listed novel library");
        Ok(summaries)
    }

    async fn find_archive(&self, name: &NovelName) -> Result<Option<ArchivePath>, LibraryError> {
        let file_names = self.archive_file_names().await?;
        // 与展示名对齐的子串匹配：展示名必然是原文件名的子串
        let file_name = match file_names.iter().find(|f| f.contains(name.as_str())) {
            Some(file_name) => file_name,
            None => return Ok(None),
        };

        // 规范化为绝对路径，作为缓存 key 使用
        let path = self.novels_dir.join(file_name);
        let canonical = match fs::canonicalize(&path).await {
            Ok(canonical) => canonical,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LibraryError::IoError(e.to_string())),
        };

        Ok(Some(ArchivePath::new(canonical)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_list_strips_suffixes_and_sorts() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("斗破苍穹-飞卢小说网.zip"), b"x").unwrap();
        std::fs::write(dir.path().join("大主宰.zip"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let library = NovelLibrary::new(dir.path(), ".zip");
        let novels = library.list().await.unwrap();

        let names: Vec<&str> = novels.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["大主宰", "斗破苍穹"]);
        assert_eq!(novels[1].file_name, "斗破苍穹-飞卢小说网.zip");
        assert!(novels.iter().all(|n| n.modified.is_some()));
    }

    #[tokio::test]
    async fn test_missing_directory_is_empty_library() {
        let dir = tempdir().unwrap();
        let library = NovelLibrary::new(dir.path().join("absent"), ".zip");

        assert!(library.list().await.unwrap().is_empty());

        let name = NovelName::new("任意").unwrap();
        assert!(library.find_archive(&name).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_archive_matches_substring_and_canonicalizes() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("斗破苍穹-飞卢小说网.zip"), b"x").unwrap();

        let library = NovelLibrary::new(dir.path(), ".zip");

        let name = NovelName::new("斗破苍穹").unwrap();
        let archive = library.find_archive(&name).await.unwrap().unwrap();
        assert!(archive.as_path().is_absolute());
        assert!(archive
            .as_path()
            .to_string_lossy()
            .ends_with("斗破苍穹-飞卢小说网.zip"));

        let missing = NovelName::new("不存在的书").unwrap();
        assert!(library.find_archive(&missing).await.unwrap().is_none());
    }
}
