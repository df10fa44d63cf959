//! 見出し語表による見出し語化
//!
//! `表層形<TAB>見出し語<TAB>品詞` 形式のTSVを引き当てる。
//! Pythonを使えない環境での評価用。

use crate::error::{Result, VerbAccuracyError};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use verb_accuracy_common::{Lemmatizer, Token};

/// 表にない語の品詞
const UNKNOWN_TAG: &str = "X";

lazy_static::lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+(?:['’-]\w+)*|[^\w\s]").unwrap();
}

#[derive(Debug, Clone)]
pub struct LookupLemmatizer {
    model_id: String,
    /// 表層形 → (見出し語, 品詞)
    entries: HashMap<String, (String, String)>,
}

impl LookupLemmatizer {
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VerbAccuracyError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_tsv_str(&content, format!("lookup:{}", path.display()))
    }

    pub fn from_tsv_str(content: &str, model_id: impl Into<String>) -> Result<Self> {
        let mut entries = HashMap::new();

        for (i, line) in content.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 {
                return Err(VerbAccuracyError::Config(format!(
                    "見出し語表 {}行目: 3列必要です（{}列）",
                    i + 1,
                    fields.len()
                )));
            }
            entries.insert(
                fields[0].to_string(),
                (fields[1].to_string(), fields[2].to_string()),
            );
        }

        Ok(Self {
            model_id: model_id.into(),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn analyze(&self, word: &str) -> Token {
        let hit = self
            .entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()));

        match hit {
            Some((lemma, pos)) => Token::new(word, lemma.as_str(), pos.as_str()),
            None => Token::new(word, word.to_lowercase(), UNKNOWN_TAG),
        }
    }
}

impl Lemmatizer for LookupLemmatizer {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn lemmatize(&mut self, text: &str) -> verb_accuracy_common::Result<Vec<Token>> {
        Ok(WORD_RE
            .find_iter(text)
            .map(|m| self.analyze(m.as_str()))
            .collect())
    }
}
