//! 画像名 → 正解訳語 の解決
//!
//! 画像ファイル名は `<クエリ（_区切り）>__<接尾部>` 形式。
//! `__` より前をクエリとして辞書を引く。

use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::token::Lemmatizer;
use std::path::Path;

/// クエリ部と接尾部の区切り
pub const PREFIX_DELIMITER: &str = "__";

/// 改行区切りのファイルを行リストとして読み込み
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(|l| l.to_string()).collect())
}

/// 画像名からクエリ文字列を取り出す（`_` は空白に戻す）
pub fn query_prefix(image_name: &str) -> String {
    image_name
        .split(PREFIX_DELIMITER)
        .next()
        .unwrap_or_default()
        .replace('_', " ")
}

/// 各画像の正解訳語を画像順に返す
///
/// 返すのは辞書の訳語そのもの。見出し語はデバッグログ用にのみ計算する。
pub fn resolve_gold_forms<L: Lemmatizer + ?Sized>(
    images: &[String],
    lexicon: &Lexicon,
    lemmatizer: &mut L,
) -> Result<Vec<String>> {
    let forms = images
        .iter()
        .map(|name| {
            let query = query_prefix(name);
            lexicon
                .get(&query)
                .map(|form| form.to_string())
                .ok_or(Error::UnknownQuery(query))
        })
        .collect::<Result<Vec<_>>>()?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        let lemmas = lemmatizer.lemmatize_batch(&forms)?;
        for (form, tokens) in forms.iter().zip(&lemmas) {
            if let Some(first) = tokens.first() {
                if first.lemma != *form {
                    tracing::debug!("Gold form '{}' lemmatizes to '{}'", form, first.lemma);
                }
            }
        }
    }

    Ok(forms)
}
