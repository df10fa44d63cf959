use crate::error::{Result, VerbAccuracyError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use verb_accuracy_common::{CorrectionTable, Language};

const PYTHON_ENV: &str = "VERB_ACCURACY_PYTHON";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// spaCyを実行するPythonインタプリタ
    pub python: String,
    pub english_model: String,
    pub german_model: String,
    /// 不一致行の診断出力
    pub verbose: bool,
    /// 組み込み補正テーブルに追加する補正
    pub corrections: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            python: "python3".into(),
            english_model: "en_core_web_sm".into(),
            german_model: "de_core_news_sm".into(),
            verbose: false,
            corrections: HashMap::new(),
        }
    }
}

impl Config {
    /// ユーザー設定を読み込み（なければデフォルト）
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::info!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VerbAccuracyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("verb-accuracy").join("config.json"))
    }

    /// 言語に対応する見出し語化モデル名
    pub fn model_for(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english_model,
            Language::German => &self.german_model,
        }
    }

    pub fn python_executable(&self) -> String {
        // 環境変数を優先
        std::env::var(PYTHON_ENV).unwrap_or_else(|_| self.python.clone())
    }

    /// 組み込み補正に設定の補正を重ねたテーブル
    pub fn correction_table(&self) -> CorrectionTable {
        let mut table = CorrectionTable::builtin();
        let custom: CorrectionTable = self
            .corrections
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        table.merge(&custom);
        table
    }
}
