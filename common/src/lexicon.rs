//! クエリ→正解訳語 辞書
//!
//! `query,verb,verb_translation` 列を持つCSVから読み込む。
//! 言語に応じて `verb`（en）または `verb_translation`（de）を正解とする。

use crate::error::{Error, Result};
use crate::language::Language;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const QUERY_COLUMN: &str = "query";

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// CSVファイルから読み込み
    pub fn from_csv(path: &Path, language: Language) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, language)
    }

    /// CSVリーダーから読み込み（1行目はヘッダー）
    pub fn from_reader<R: Read>(reader: R, language: Language) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let query_idx = column_index(&headers, QUERY_COLUMN)?;
        let gold_column = language.gold_column();
        let gold_idx = column_index(&headers, gold_column)?;

        let mut entries = HashMap::new();
        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = i + 1;

            let query = record.get(query_idx).ok_or_else(|| Error::MissingColumn {
                column: QUERY_COLUMN.to_string(),
                row,
            })?;
            let verb = record.get(gold_idx).ok_or_else(|| Error::MissingColumn {
                column: gold_column.to_string(),
                row,
            })?;

            // 重複クエリは後勝ち
            entries.insert(query.trim().to_string(), verb.trim().to_string());
        }

        tracing::info!("Loaded {} lexicon entries ({})", entries.len(), gold_column);
        Ok(Self { entries })
    }

    pub fn get(&self, query: &str) -> Option<&str> {
        self.entries.get(query).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| Error::MissingColumn {
            column: column.to_string(),
            row: 0,
        })
}
