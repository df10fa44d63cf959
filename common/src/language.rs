//! 評価対象言語

use serde::{Deserialize, Serialize};
use std::fmt;

/// 対応言語（英語・ドイツ語のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    /// 言語コードから変換。未対応なら None
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "de" => Some(Language::German),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    /// 正解訳語を取り出すCSV列
    pub fn gold_column(&self) -> &'static str {
        match self {
            Language::English => "verb",
            Language::German => "verb_translation",
        }
    }

    /// 接尾一致ルールを使うか（分離前綴り動詞のためドイツ語のみ）
    pub fn uses_suffix_match(&self) -> bool {
        matches!(self, Language::German)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
