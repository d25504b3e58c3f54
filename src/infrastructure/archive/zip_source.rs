//! Zip Archive Source - 压缩包正文提取
//!
//! 实现 ArchiveSourcePort trait：
//! - 按中央目录顺序定位 TXT 条目
//! - 排除 VIP 说明文件
//! - 按固定顺序尝试候选编码
//! - 去除已知来源条目的首行标题

use std::fs::File;
use std::io::Read;
use std::path::Path;

use async_trait::async_trait;
use encoding_rs::{Encoding, GBK, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use zip::ZipArchive;

use crate::application::ports::ArchiveSourcePort;
use crate::domain::novel::{ArchivePath, ExtractError};

/// 正文条目的扩展名
const TXT_SUFFIX: &str = ".txt";

/// 按条目名精确排除的 VIP 说明文件
///
/// 第一个名字是 GBK 文件名在 cp437 规则下的还原形态：条目名未标记
/// UTF-8 时按 cp437 解码，"Vip用户必读.txt" 的 GBK 字节就呈现为这串
/// 乱码。两种形态都要排除。
const BOILERPLATE_ENTRIES: &[&str] = &["Vip╙├╗º▒╪╢┴.txt", "Vip用户必读.txt"];

/// 已知来源的条目名标记
///
/// 带标记的条目优先选中；其首行是重复的书名，需要去除。
const TRUSTED_SOURCE_MARKER: &str = "-飞卢小说网.txt";

/// 严格候选编码，按顺序尝试，首个无错解码胜出
///
/// 全部报错时 `decode_text` 退回 windows-1252。
static CANDIDATE_ENCODINGS: [&Encoding; 4] = [GBK, UTF_8, UTF_16LE, UTF_16BE];

/// 从压缩包中提取小说正文
///
/// 同步实现，供异步端口通过 `spawn_blocking` 调用。
/// 条目选择只依赖条目名和中央目录顺序，对同一压缩包结果确定。
pub fn extract_novel_text(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::archive_open(path, e.to_string()))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| ExtractError::archive_open(path, e.to_string()))?;

    // 先按中央目录顺序收集 TXT 条目名，再决定读哪一个
    let mut txt_entries: Vec<(usize, String)> = Vec::new();
    for index in 0..archive.len() {
        let entry = archive
            .by_index(index)
            .map_err(|e| ExtractError::archive_open(path, e.to_string()))?;
        if entry.name().ends_with(TXT_SUFFIX) {
            txt_entries.push((index, entry.name().to_string()));
        }
    }

    if txt_entries.is_empty() {
        return Err(ExtractError::NoTextEntry {
            path: path.to_path_buf(),
        });
    }

    txt_entries.retain(|(_, name)| !BOILERPLATE_ENTRIES.contains(&name.as_str()));
    if txt_entries.is_empty() {
        return Err(ExtractError::OnlyBoilerplate {
            path: path.to_path_buf(),
        });
    }

    // 优先第一个带来源标记的条目，否则取存量中的第一个
    let (index, name) = txt_entries
        .iter()
        .find(|(_, name)| name.contains(TRUSTED_SOURCE_MARKER))
        .unwrap_or(&txt_entries[0])
        .clone();

    let mut entry = archive
        .by_index(index)
        .map_err(|e| ExtractError::archive_open(path, e.to_string()))?;
    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| ExtractError::archive_open(path, e.to_string()))?;

    let text = decode_text(&name, &bytes);

    if name.contains(TRUSTED_SOURCE_MARKER) {
        Ok(strip_leading_title(&text).to_string())
    } else {
        Ok(text)
    }
}

/// 按候选顺序解码条目字节
///
/// 严格候选全部报错时退回 windows-1252：单字节全映射，对任意字节
/// 序列都解码成功。
fn decode_text(entry_name: &str, bytes: &[u8]) -> String {
    for encoding in CANDIDATE_ENCODINGS {
        // BOM 存在时 decode 以 BOM 指示的编码为准
        let (text, actual, had_errors) = encoding.decode(bytes);
        if !had_errors {
            tracing::debug!(
                entry = entry_name,
                encoding = actual.name(),
                "Decoded novel text"
            );
            return text.into_owned();
        }
    }

    // decode 的 BOM 探测会覆盖候选编码本身，兜底解码必须绕过它
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    tracing::warn!(
        entry = entry_name,
        "No candidate encoding decoded cleanly, falling back to windows-1252"
    );
    text.into_owned()
}

/// 去除首行书名；只有一行时原样保留
fn strip_leading_title(text: &str) -> &str {
    match text.split_once('\n') {
        Some((_, rest)) => rest,
        None => text,
    }
}

/// 基于 zip 的压缩包正文来源
pub struct ZipArchiveSource;

impl ZipArchiveSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZipArchiveSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArchiveSourcePort for ZipArchiveSource {
    async fn extract_text(&self, archive: &ArchivePath) -> Result<String, ExtractError> {
        let path = archive.as_path().to_path_buf();

        // zip 解压是同步 IO，放到阻塞线程池执行
        tokio::task::spawn_blocking(move || extract_novel_text(&path))
            .await
            .map_err(|e| {
                ExtractError::archive_open(archive.as_path(), format!("blocking task failed: {e}"))
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        for (name, bytes) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap();
    }

    fn utf16le_with_bom(text: &str) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_extract_gbk_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        let text = "第一章 开端\n 山外青山楼外楼。";
        let (gbk_bytes, _, _) = GBK.encode(text);
        write_archive(&path, &[("正文.txt", &gbk_bytes)]);

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, text);
    }

    #[test]
    fn test_extract_utf16le_bom_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        let text = "第一章\n 正文。";
        write_archive(&path, &[("正文.txt", &utf16le_with_bom(text))]);

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, text);
    }

    #[test]
    fn test_undecodable_bytes_fall_back_to_windows_1252() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        // 0xFF 对 GBK/UTF-8 非法，奇数长度也排除两种 UTF-16
        write_archive(&path, &[("正文.txt", &[0xFF])]);

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, "ÿ");
    }

    #[test]
    fn test_bom_with_invalid_payload_falls_back_to_windows_1252() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        // UTF-8 BOM 后跟非法字节：BOM 探测让四个严格候选都按 UTF-8
        // 解码并全部报错，兜底仍须成功，BOM 字节按 windows-1252 呈现
        write_archive(&path, &[("正文.txt", &[0xEF, 0xBB, 0xBF, 0xFF])]);

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, "ï»¿ÿ");
    }

    #[test]
    fn test_marker_entry_drops_first_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        write_archive(
            &path,
            &[("斗破苍穹-飞卢小说网.txt", "斗破苍穹\n第一章 正文".as_bytes())],
        );

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, "第一章 正文");
    }

    #[test]
    fn test_marker_entry_single_line_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        write_archive(&path, &[("某书-飞卢小说网.txt", "只有一行".as_bytes())]);

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, "只有一行");
    }

    #[test]
    fn test_marker_entry_preferred_over_position() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        write_archive(
            &path,
            &[
                ("说明.txt", "不该选这个".as_bytes()),
                ("某书-飞卢小说网.txt", "书名\n来源正文".as_bytes()),
            ],
        );

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, "来源正文");
    }

    #[test]
    fn test_first_entry_in_archive_order_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        // 写入顺序即中央目录顺序，与字典序无关
        write_archive(
            &path,
            &[("b.txt", "乙".as_bytes()), ("a.txt", "甲".as_bytes())],
        );

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, "乙");
    }

    #[test]
    fn test_boilerplate_excluded_real_entry_used() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        write_archive(
            &path,
            &[
                ("Vip用户必读.txt", "付费说明".as_bytes()),
                ("真正文.txt", "真内容".as_bytes()),
            ],
        );

        let extracted = extract_novel_text(&path).unwrap();
        assert_eq!(extracted, "真内容");
    }

    #[test]
    fn test_boilerplate_only_archive_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        write_archive(&path, &[("Vip用户必读.txt", "付费说明".as_bytes())]);

        let err = extract_novel_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::OnlyBoilerplate { .. }));
    }

    #[test]
    fn test_archive_without_txt_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        write_archive(&path, &[("cover.jpg", &[0xFF, 0xD8, 0xFF])]);

        let err = extract_novel_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::NoTextEntry { .. }));
    }

    #[test]
    fn test_missing_archive_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("不存在.zip");

        let err = extract_novel_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::ArchiveOpen { .. }));
    }

    #[test]
    fn test_corrupt_archive_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.zip");
        std::fs::write(&path, b"not a zip file").unwrap();

        let err = extract_novel_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::ArchiveOpen { .. }));
    }

    #[tokio::test]
    async fn test_port_extracts_through_blocking_pool() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("novel.zip");
        write_archive(&path, &[("正文.txt", "异步提取".as_bytes())]);

        let source = ZipArchiveSource::new();
        let archive = ArchivePath::new(path);
        let extracted = source.extract_text(&archive).await.unwrap();
        assert_eq!(extracted, "异步提取");
    }
}
