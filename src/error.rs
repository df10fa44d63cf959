use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerbAccuracyError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("見出し語化プロセスエラー: {0}")]
    LemmatizerProcess(String),

    #[error(transparent)]
    Common(#[from] verb_accuracy_common::Error),
}

pub type Result<T> = std::result::Result<T, VerbAccuracyError>;

impl From<VerbAccuracyError> for verb_accuracy_common::Error {
    /// `Lemmatizer` トレイト境界を越えるときの変換
    fn from(err: VerbAccuracyError) -> Self {
        match err {
            VerbAccuracyError::Common(inner) => inner,
            VerbAccuracyError::Io(inner) => verb_accuracy_common::Error::Io(inner),
            VerbAccuracyError::JsonParse(inner) => verb_accuracy_common::Error::Json(inner),
            other => verb_accuracy_common::Error::Lemmatizer(other.to_string()),
        }
    }
}
