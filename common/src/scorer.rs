//! 動詞訳語の正解率計算
//!
//! 候補訳の各行を見出し語化し、補正テーブルを適用したうえで
//! 正解訳語と一致する動詞トークンがあるかを判定する。

use crate::corrections::CorrectionTable;
use crate::error::{Error, Result};
use crate::gold::read_lines;
use crate::language::Language;
use crate::token::{Lemmatizer, Token};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// 1行分の判定結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutcome {
    pub image: String,
    pub line: String,
    pub gold: String,
    pub lemmas: Vec<String>,
    pub matched: bool,
}

/// 評価結果
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub language: Language,
    pub correct: usize,
    /// 候補訳の行数（整列できなかった行も含む）
    pub total: usize,
    pub items: Vec<ItemOutcome>,
}

impl Evaluation {
    /// 正解率（%）。候補が0行ならエラー
    pub fn accuracy(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(Error::EmptyCandidates);
        }
        Ok(100.0 * (self.correct as f64 / self.total as f64))
    }

    /// 結果行 `{lang} verb translation accuracy: {percentage}`
    pub fn summary_line(&self) -> Result<String> {
        Ok(format!(
            "{} verb translation accuracy: {:?}",
            self.language,
            self.accuracy()?
        ))
    }
}

/// トークンが正解訳語と一致するか
///
/// 動詞であることが前提。ドイツ語は正解訳語が見出し語で終われば一致とする。
pub fn is_match(token: &Token, gold: &str, language: Language) -> bool {
    token.is_verb()
        && (token.lemma == gold || (language.uses_suffix_match() && gold.ends_with(&token.lemma)))
}

pub struct Scorer<'a> {
    language: Language,
    corrections: &'a CorrectionTable,
    verbose: bool,
}

impl<'a> Scorer<'a> {
    pub fn new(language: Language, corrections: &'a CorrectionTable) -> Self {
        Self {
            language,
            corrections,
            verbose: false,
        }
    }

    /// 不一致行の診断出力を有効化
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 候補訳ファイルを読み込んで評価
    pub fn score_file<L: Lemmatizer + ?Sized>(
        &self,
        lemmatizer: &mut L,
        input: &Path,
        golds: &[String],
        images: &[String],
    ) -> Result<Evaluation> {
        let lines = read_lines(input)?;
        self.score(lemmatizer, &lines, golds, images)
    }

    /// 候補訳・正解訳語・画像名を位置で対応づけて評価（診断は標準出力）
    pub fn score<L: Lemmatizer + ?Sized>(
        &self,
        lemmatizer: &mut L,
        lines: &[String],
        golds: &[String],
        images: &[String],
    ) -> Result<Evaluation> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.score_with_diagnostics(lemmatizer, lines, golds, images, &mut out)
    }

    /// `score` と同じだが、不一致行の診断を `out` に書き出す
    pub fn score_with_diagnostics<L: Lemmatizer + ?Sized, W: Write>(
        &self,
        lemmatizer: &mut L,
        lines: &[String],
        golds: &[String],
        images: &[String],
        out: &mut W,
    ) -> Result<Evaluation> {
        let aligned = lines.len().min(golds.len()).min(images.len());
        if aligned != lines.len() || aligned != golds.len() || aligned != images.len() {
            tracing::warn!(
                "Length mismatch: {} lines, {} gold forms, {} images; scoring the first {}",
                lines.len(),
                golds.len(),
                images.len(),
                aligned
            );
        }

        let cleaned: Vec<String> = lines[..aligned]
            .iter()
            .map(|line| line.replace('\n', ""))
            .collect();

        tracing::info!(
            "Lemmatizing {} lines with {}",
            cleaned.len(),
            lemmatizer.model_id()
        );
        let docs = lemmatizer.lemmatize_batch(&cleaned)?;
        if docs.len() != cleaned.len() {
            return Err(Error::Lemmatizer(format!(
                "expected {} analyses, got {}",
                cleaned.len(),
                docs.len()
            )));
        }

        let mut correct = 0;
        let mut items = Vec::with_capacity(aligned);

        for (((line, mut tokens), gold), image) in cleaned.into_iter().zip(docs).zip(golds).zip(images) {
            self.corrections.apply(&mut tokens);

            let matched = tokens.iter().any(|token| is_match(token, gold, self.language));
            let lemmas: Vec<String> = tokens.into_iter().map(|t| t.lemma).collect();

            if matched {
                correct += 1;
            } else if self.verbose {
                writeln!(out, "{} | {} | {}", line, python_list(&lemmas), gold)?;
            }

            items.push(ItemOutcome {
                image: image.clone(),
                line,
                gold: gold.clone(),
                lemmas,
                matched,
            });
        }

        Ok(Evaluation {
            language: self.language,
            correct,
            total: lines.len(),
            items,
        })
    }
}

/// 文字列リストを `['a', 'b']` 形式で表記する
pub fn python_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| python_str(s)).collect();
    format!("[{}]", quoted.join(", "))
}

fn python_str(s: &str) -> String {
    // `'` を含み `"` を含まない場合のみダブルクォート
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
