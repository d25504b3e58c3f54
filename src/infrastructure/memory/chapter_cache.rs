//! Chapter Cache - 章节解析结果的内存缓存
//!
//! DashMap 分片读写 + tokio OnceCell 按键单飞：
//! - 同一路径的并发首次解析只执行一次底层计算
//! - 计算失败不驻留，下一次请求重新计算
//! - 容量超限时按最后访问序号淘汰最旧条目

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::application::ports::CacheStats;
use crate::domain::novel::ChapterSet;

/// 默认缓存容量（条目数）
pub const DEFAULT_MAX_ENTRIES: usize = 32;

/// 单个缓存槽
///
/// cell 未初始化表示计算尚未完成；last_accessed 是全局访问序号的
/// 快照，数值越小越旧。
struct CacheSlot {
    cell: OnceCell<Arc<ChapterSet>>,
    last_accessed: AtomicU64,
}

impl CacheSlot {
    fn empty() -> Arc<Self> {
        Arc::new(Self {
            cell: OnceCell::new(),
            last_accessed: AtomicU64::new(0),
        })
    }

    fn touch(&self, seq: u64) {
        self.last_accessed.store(seq, Ordering::Relaxed);
    }
}

/// 章节缓存
///
/// key 是书库解析出的规范化压缩包路径，请求方提供的原始字符串
/// 从不直接作为 key。
pub struct ChapterCache {
    slots: DashMap<PathBuf, Arc<CacheSlot>>,
    max_entries: usize,
    access_seq: AtomicU64,
    hit_count: AtomicU64,
    miss_count: AtomicU64,
    eviction_count: AtomicU64,
}

impl ChapterCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            slots: DashMap::new(),
            max_entries,
            access_seq: AtomicU64::new(0),
            hit_count: AtomicU64::new(0),
            miss_count: AtomicU64::new(0),
            eviction_count: AtomicU64::new(0),
        }
    }

    /// 取缓存值，未命中时执行 `compute` 并缓存其成功结果
    ///
    /// 并发语义：
    /// - 同一 key 的首次计算只执行一次，其余调用等待同一结果
    /// - 不同 key 的计算互不阻塞
    /// - 计算失败时丢弃槽位（除非并发方已成功），错误原样返回
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &Path,
        compute: F,
    ) -> Result<Arc<ChapterSet>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ChapterSet, E>>,
    {
        let slot = self.slot_for(key);
        let was_initialized = slot.cell.initialized();

        let result = slot
            .cell
            .get_or_try_init(|| async { compute().await.map(Arc::new) })
            .await;

        match result {
            Ok(set) => {
                slot.touch(self.next_seq());
                if was_initialized {
                    self.hit_count.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(key = %key.display(), "Chapter cache hit");
                } else {
                    self.miss_count.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(
                        key = %key.display(),
                        chapters = set.len(),
                        "Chapter cache filled"
                    );
                    // 计算期间槽位可能因对手方失败被移除，成功结果要回写
                    self.slots
                        .entry(key.to_path_buf())
                        .or_insert_with(|| slot.clone());
                    self.evict_if_full(key);
                }
                Ok(set.clone())
            }
            Err(e) => {
                // 失败不驻留：仅当槽仍未初始化时移除，并发成功者优先
                self.slots.remove_if(key, |_, s| !s.cell.initialized());
                Err(e)
            }
        }
    }

    /// 当前条目数（含计算中的槽位）
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 缓存统计信息
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.slots.len(),
            max_entries: self.max_entries,
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            eviction_count: self.eviction_count.load(Ordering::Relaxed),
        }
    }

    /// 取出或建立 key 对应的槽位
    ///
    /// 返回前复制 Arc 并释放分片锁，锁从不跨越 await 持有。
    fn slot_for(&self, key: &Path) -> Arc<CacheSlot> {
        if let Some(slot) = self.slots.get(key) {
            return slot.clone();
        }
        self.slots
            .entry(key.to_path_buf())
            .or_insert_with(CacheSlot::empty)
            .clone()
    }

    fn next_seq(&self) -> u64 {
        self.access_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// 容量超限时淘汰最久未访问的已完成条目
    ///
    /// 计算中的槽位和刚写入的 key 不参与淘汰。
    fn evict_if_full(&self, just_used: &Path) {
        while self.slots.len() > self.max_entries {
            let mut oldest: Option<(PathBuf, u64)> = None;
            for item in self.slots.iter() {
                if !item.value().cell.initialized() || item.key().as_path() == just_used {
                    continue;
                }
                let seq = item.value().last_accessed.load(Ordering::Relaxed);
                let is_older = oldest.as_ref().map(|(_, s)| seq < *s).unwrap_or(true);
                if is_older {
                    oldest = Some((item.key().clone(), seq));
                }
            }

            match oldest {
                Some((key, _)) => {
                    self.slots.remove(&key);
                    self.eviction_count.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(key = %key.display(), "LRU evicted chapter cache entry");
                }
                // 只剩计算中的槽位，没有可淘汰对象
                None => break,
            }
        }
    }
}

impl Default for ChapterCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}
