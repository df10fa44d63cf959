//! 見出し語補正テーブル
//!
//! 見出し語化器が誤る既知の動詞を正しい見出し語に置き換える。
//! 補正対象は品詞が VERB のトークンのみ。

use crate::error::Result;
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 組み込みの補正エントリ（誤った見出し語, 正しい見出し語）
const BUILTIN_CORRECTIONS: &[(&str, &str)] = &[
    ("herausstreckt", "heraustrecken"),
    ("blockt", "blocken"),
    ("fällt", "fallen"),
    ("fällen", "fallen"),
    ("schreit", "schreiten"),
    ("kremt", "kremen"),
    ("passt", "passen"),
    ("coupiert", "coupieren"),
    ("presst", "pressen"),
    ("gezogen", "ziehen"),
    ("abzublocken", "abblocken"),
    ("diving", "dive"),
    ("riding", "ride"),
    ("rid", "ride"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrectionTable {
    entries: HashMap<String, String>,
}

impl CorrectionTable {
    /// 組み込みテーブル
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_CORRECTIONS
                .iter()
                .map(|&(wrong, right)| (wrong.to_string(), right.to_string()))
                .collect(),
        }
    }

    /// JSONオブジェクト `{"誤": "正"}` から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// テーブルをマージ（後から追加した方が優先）
    pub fn merge(&mut self, other: &CorrectionTable) {
        self.entries.extend(other.entries.clone());
    }

    pub fn get(&self, lemma: &str) -> Option<&str> {
        self.entries.get(lemma).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 動詞トークンの見出し語を補正
    pub fn apply(&self, tokens: &mut [Token]) {
        for token in tokens.iter_mut().filter(|t| t.is_verb()) {
            if let Some(corrected) = self.entries.get(&token.lemma) {
                token.lemma = corrected.clone();
            }
        }
    }
}

impl FromIterator<(String, String)> for CorrectionTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
