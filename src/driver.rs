//! 評価の実行
//!
//! 言語判定 → 見出し語化器構築 → 辞書読み込み → 正解訳語解決 → 採点 → 出力

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, VerbAccuracyError};
use crate::lemmatizer::{build_lemmatizer, CachedLemmatizer};
use crate::report::Report;
use std::path::Path;
use verb_accuracy_common::{
    read_lines, resolve_gold_forms, CorrectionTable, Evaluation, Language, Lemmatizer, Lexicon,
    Scorer,
};

/// 未対応言語のときの案内
pub const UNSUPPORTED_LANGUAGE_MESSAGE: &str = "This script currently only support EN or DE.";

/// 評価に使う入力ファイル
#[derive(Debug, Clone, Copy)]
pub struct EvalInputs<'a> {
    /// 翻訳出力
    pub input: &'a Path,
    pub images: &'a Path,
    pub querydict: &'a Path,
}

/// CLI引数と設定から評価を実行し、結果行を出力
///
/// 未対応言語なら案内を表示して `None` を返す（エラーにはしない）。
/// 設定は言語判定を通過してから `load_config` で読み込む。
pub fn run<F>(cli: &Cli, load_config: F) -> Result<Option<Evaluation>>
where
    F: FnOnce() -> Result<Config>,
{
    let Some(language) = Language::from_code(&cli.lang) else {
        println!("{}", UNSUPPORTED_LANGUAGE_MESSAGE);
        return Ok(None);
    };
    let config = &load_config()?;

    let inputs = EvalInputs {
        input: &cli.input,
        images: &cli.images,
        querydict: &cli.querydict,
    };
    let corrections = config.correction_table();
    let verbose = cli.verbose || config.verbose;

    let lemmatizer =
        build_lemmatizer(cli.lemmatizer, language, config, cli.lemma_table.as_deref())?;

    let evaluation = if cli.use_cache {
        let folder = match cli.input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut cached = CachedLemmatizer::new(lemmatizer, folder);
        let evaluation = evaluate(language, &mut cached, inputs, &corrections, verbose)?;
        cached.persist()?;
        evaluation
    } else {
        let mut lemmatizer = lemmatizer;
        evaluate(language, &mut lemmatizer, inputs, &corrections, verbose)?
    };

    println!("{}", evaluation.summary_line()?);

    if let Some(report_path) = &cli.report {
        Report::new(&evaluation)?.write(report_path)?;
        tracing::info!("Wrote report to {}", report_path.display());
    }

    Ok(Some(evaluation))
}

/// 辞書・画像一覧・翻訳出力を読み込んで採点
pub fn evaluate<L: Lemmatizer + ?Sized>(
    language: Language,
    lemmatizer: &mut L,
    inputs: EvalInputs<'_>,
    corrections: &CorrectionTable,
    verbose: bool,
) -> Result<Evaluation> {
    for path in [inputs.querydict, inputs.images, inputs.input] {
        if !path.exists() {
            return Err(VerbAccuracyError::FileNotFound(path.display().to_string()));
        }
    }

    let lexicon = Lexicon::from_csv(inputs.querydict, language)?;
    let images = read_lines(inputs.images)?;
    tracing::info!("Loaded {} evaluation images", images.len());

    let golds = resolve_gold_forms(&images, &lexicon, lemmatizer)?;

    let scorer = Scorer::new(language, corrections).with_verbose(verbose);
    let evaluation = scorer.score_file(lemmatizer, inputs.input, &golds, &images)?;
    tracing::info!(
        "{} of {} lines matched",
        evaluation.correct,
        evaluation.total
    );

    Ok(evaluation)
}
