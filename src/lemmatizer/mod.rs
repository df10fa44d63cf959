pub mod cache;
mod lookup;
mod spacy;

pub use cache::{CachedLemmatizer, LemmaCache};
pub use lookup::LookupLemmatizer;
pub use spacy::SpacyLemmatizer;

use crate::cli::LemmatizerBackend;
use crate::config::Config;
use crate::error::{Result, VerbAccuracyError};
use std::path::Path;
use verb_accuracy_common::{Language, Lemmatizer};

/// バックエンド選択に応じて見出し語化器を構築
pub fn build_lemmatizer(
    backend: LemmatizerBackend,
    language: Language,
    config: &Config,
    lemma_table: Option<&Path>,
) -> Result<Box<dyn Lemmatizer>> {
    match backend {
        LemmatizerBackend::Spacy => {
            let model = config.model_for(language);
            tracing::info!("Using spaCy model {}", model);
            Ok(Box::new(SpacyLemmatizer::new(config.python_executable(), model)))
        }
        LemmatizerBackend::Lookup => {
            let path = lemma_table.ok_or_else(|| {
                VerbAccuracyError::Config("lookup には --lemma-table が必要です".into())
            })?;
            let lemmatizer = LookupLemmatizer::from_file(path)?;
            tracing::info!("Loaded {} lemma table entries", lemmatizer.len());
            Ok(Box::new(lemmatizer))
        }
    }
}
