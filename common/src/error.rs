//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' (row {row})")]
    MissingColumn { column: String, row: usize },

    #[error("Query not found in lexicon: '{0}'")]
    UnknownQuery(String),

    #[error("No candidate lines to score")]
    EmptyCandidates,

    #[error("Lemmatizer error: {0}")]
    Lemmatizer(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
