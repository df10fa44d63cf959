//! トークンと見出し語化インターフェース
//!
//! 見出し語化そのものは外部（spaCy等）に委譲する。
//! 評価ロジックは `Lemmatizer` トレイト越しにのみ利用する。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 動詞を表す品詞タグ（Universal POS）
pub const VERB_TAG: &str = "VERB";

/// 見出し語化済みトークン
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 表層形
    pub text: String,
    /// 見出し語
    pub lemma: String,
    /// 品詞タグ
    pub pos: String,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
        }
    }

    pub fn is_verb(&self) -> bool {
        self.pos == VERB_TAG
    }
}

/// 文字列 → トークン列 の見出し語化器
pub trait Lemmatizer {
    /// モデル識別子（キャッシュキー・ログ用）
    fn model_id(&self) -> &str;

    /// 1行を見出し語化
    fn lemmatize(&mut self, text: &str) -> Result<Vec<Token>>;

    /// 複数行をまとめて見出し語化
    ///
    /// 戻り値は入力と同じ長さ・同じ順序であること。
    fn lemmatize_batch(&mut self, texts: &[String]) -> Result<Vec<Vec<Token>>> {
        texts.iter().map(|text| self.lemmatize(text)).collect()
    }
}

impl<L: Lemmatizer + ?Sized> Lemmatizer for Box<L> {
    fn model_id(&self) -> &str {
        (**self).model_id()
    }

    fn lemmatize(&mut self, text: &str) -> Result<Vec<Token>> {
        (**self).lemmatize(text)
    }

    fn lemmatize_batch(&mut self, texts: &[String]) -> Result<Vec<Vec<Token>>> {
        (**self).lemmatize_batch(texts)
    }
}
