//! 行ごとの判定結果をJSONで出力

use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use verb_accuracy_common::{Evaluation, ItemOutcome, Language};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub language: Language,
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
    pub generated_at: String,
    pub items: &'a [ItemOutcome],
}

impl<'a> Report<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Result<Self> {
        Ok(Self {
            language: evaluation.language,
            correct: evaluation.correct,
            total: evaluation.total,
            accuracy: evaluation.accuracy()?,
            generated_at: chrono::Local::now().to_rfc3339(),
            items: &evaluation.items,
        })
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
