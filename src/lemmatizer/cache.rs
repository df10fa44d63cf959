//! 見出し語化結果キャッシュモジュール
//!
//! (モデル, 行) のSHA-256をキーに見出し語化結果を保存し、
//! 同じ出力ファイルを再評価するときの spaCy 呼び出しを省く。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use verb_accuracy_common::{Lemmatizer, Token};

const CACHE_FILE_NAME: &str = ".lemma-cache.json";

/// キャッシュファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmaCache {
    /// バージョン（互換性チェック用）
    version: u32,
    /// キー → トークン列
    entries: HashMap<String, Vec<Token>>,
}

impl LemmaCache {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// キャッシュファイルを読み込み（読めなければ空）
    pub fn load(folder: &Path) -> Self {
        let cache_path = Self::cache_path(folder);
        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        match serde_json::from_reader::<_, LemmaCache>(BufReader::new(file)) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(_) => {
                tracing::warn!("Lemma cache version mismatch, rebuilding");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable lemma cache {}: {}", cache_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, folder: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(folder))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Vec<Token>> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, tokens: Vec<Token>) {
        self.entries.insert(key, tokens);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LemmaCache {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// キャッシュキー（モデル名と行のSHA-256）
pub fn cache_key(model_id: &str, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(model_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// キャッシュを挟んだ見出し語化器
pub struct CachedLemmatizer<L> {
    inner: L,
    cache: LemmaCache,
    folder: PathBuf,
    dirty: bool,
}

impl<L: Lemmatizer> CachedLemmatizer<L> {
    pub fn new(inner: L, folder: &Path) -> Self {
        let cache = LemmaCache::load(folder);
        tracing::info!("Lemma cache: {} entries", cache.len());
        Self {
            inner,
            cache,
            folder: folder.to_path_buf(),
            dirty: false,
        }
    }

    pub fn cache(&self) -> &LemmaCache {
        &self.cache
    }

    /// 新しい結果があればキャッシュファイルに書き出す
    pub fn persist(&mut self) -> Result<()> {
        if self.dirty {
            self.cache.save(&self.folder)?;
            self.dirty = false;
        }
        Ok(())
    }
}

impl<L: Lemmatizer> Lemmatizer for CachedLemmatizer<L> {
    fn model_id(&self) -> &str {
        self.inner.model_id()
    }

    fn lemmatize(&mut self, text: &str) -> verb_accuracy_common::Result<Vec<Token>> {
        let mut docs = self.lemmatize_batch(&[text.to_string()])?;
        Ok(docs.pop().unwrap_or_default())
    }

    fn lemmatize_batch(&mut self, texts: &[String]) -> verb_accuracy_common::Result<Vec<Vec<Token>>> {
        let model_id = self.inner.model_id().to_string();
        let keys: Vec<String> = texts.iter().map(|t| cache_key(&model_id, t)).collect();

        // 未キャッシュの行（重複は1回だけ）
        let mut seen = HashSet::new();
        let mut missing_keys = Vec::new();
        let mut missing_texts = Vec::new();
        for (key, text) in keys.iter().zip(texts) {
            if self.cache.get(key).is_none() && seen.insert(key.as_str()) {
                missing_keys.push(key.clone());
                missing_texts.push(text.clone());
            }
        }

        tracing::info!(
            "Lemma cache: {} hits, {} misses",
            texts.len() - missing_texts.len(),
            missing_texts.len()
        );

        if !missing_texts.is_empty() {
            let docs = self.inner.lemmatize_batch(&missing_texts)?;
            for (key, tokens) in missing_keys.into_iter().zip(docs) {
                self.cache.insert(key, tokens);
            }
            self.dirty = true;
        }

        keys.iter()
            .map(|key| {
                self.cache.get(key).cloned().ok_or_else(|| {
                    verb_accuracy_common::Error::Lemmatizer(format!("missing cache entry {}", key))
                })
            })
            .collect()
    }
}
