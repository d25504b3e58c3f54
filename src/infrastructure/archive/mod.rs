//! Archive - 压缩包正文来源实现

mod zip_source;

pub use zip_source::{extract_novel_text, ZipArchiveSource};
