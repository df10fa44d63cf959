//! spaCy連携モジュール
//!
//! Pythonサブプロセスで spaCy を起動し、行のJSON配列を標準入力で渡して
//! トークン列のJSON配列を標準出力から受け取る。1バッチ = 1プロセス。

use crate::error::{Result, VerbAccuracyError};
use std::io::Write;
use std::process::{Command, Stdio};
use verb_accuracy_common::{Lemmatizer, Token};

/// 標準入力: `["行", ...]` / 標準出力: `[[{"text","lemma","pos"}, ...], ...]`
const BRIDGE_SCRIPT: &str = r#"
import json, sys
import spacy
nlp = spacy.load(sys.argv[1])
lines = json.load(sys.stdin)
out = [[{"text": t.text, "lemma": t.lemma_, "pos": t.pos_} for t in nlp(line)] for line in lines]
json.dump(out, sys.stdout, ensure_ascii=False)
"#;

#[derive(Debug, Clone)]
pub struct SpacyLemmatizer {
    python: String,
    model: String,
}

impl SpacyLemmatizer {
    pub fn new(python: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            model: model.into(),
        }
    }

    fn run_bridge(&self, texts: &[String]) -> Result<Vec<Vec<Token>>> {
        let payload = serde_json::to_vec(texts)?;

        let mut child = Command::new(&self.python)
            .args(["-c", BRIDGE_SCRIPT, self.model.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                VerbAccuracyError::LemmatizerProcess(format!("{} の起動に失敗: {}", self.python, e))
            })?;

        // 子プロセスは標準入力を読み切ってから出力する
        // 書き込み失敗時も終了を待ち、子のstderrを優先して返す
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(&payload),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if let Err(e) = write_result {
            if output.status.success() {
                return Err(VerbAccuracyError::Io(e));
            }
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VerbAccuracyError::LemmatizerProcess(format!(
                "spaCy failed (code {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        let docs = parse_response(&output.stdout)?;
        if docs.len() != texts.len() {
            return Err(VerbAccuracyError::LemmatizerProcess(format!(
                "{}行を送信したが{}件の結果が返った",
                texts.len(),
                docs.len()
            )));
        }
        Ok(docs)
    }
}

impl Lemmatizer for SpacyLemmatizer {
    fn model_id(&self) -> &str {
        &self.model
    }

    fn lemmatize(&mut self, text: &str) -> verb_accuracy_common::Result<Vec<Token>> {
        let mut docs = self.lemmatize_batch(&[text.to_string()])?;
        Ok(docs.pop().unwrap_or_default())
    }

    fn lemmatize_batch(&mut self, texts: &[String]) -> verb_accuracy_common::Result<Vec<Vec<Token>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        tracing::info!("Running spaCy model {} on {} lines", self.model, texts.len());
        Ok(self.run_bridge(texts)?)
    }
}

/// ブリッジ出力をパース
fn parse_response(stdout: &[u8]) -> Result<Vec<Vec<Token>>> {
    Ok(serde_json::from_slice(stdout)?)
}
