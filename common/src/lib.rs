//! Verb Accuracy Common Library
//!
//! 動詞訳語評価のコアロジック（CLIから利用される）

pub mod corrections;
pub mod error;
pub mod gold;
pub mod language;
pub mod lexicon;
pub mod scorer;
pub mod token;

pub use corrections::CorrectionTable;
pub use error::{Error, Result};
pub use gold::{query_prefix, read_lines, resolve_gold_forms};
pub use language::Language;
pub use lexicon::Lexicon;
pub use scorer::{is_match, python_list, Evaluation, ItemOutcome, Scorer};
pub use token::{Lemmatizer, Token, VERB_TAG};
