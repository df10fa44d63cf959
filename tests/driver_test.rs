//! 評価実行テスト
//!
//! 一時フォルダに入力ファイルを作成して辞書読み込みから採点まで通しで検証

use clap::Parser;
use std::path::Path;
use tempfile::tempdir;
use verb_accuracy::cli::Cli;
use verb_accuracy::config::Config;
use verb_accuracy::driver::{self, EvalInputs};
use verb_accuracy::error::VerbAccuracyError;
use verb_accuracy::lemmatizer::{LemmaCache, LookupLemmatizer};
use verb_accuracy_common::{CorrectionTable, Language};

const QUERY_CSV: &str = "query,verb,verb_translation\n\
                         a dog jumps,jump,springen\n\
                         a leaf falls,fall,fallen\n\
                         a man blocks a ball,block,abblocken\n";

const IMAGES: &str = "a_dog_jumps__001.jpg\n\
                      a_leaf_falls__002.jpg\n\
                      a_man_blocks_a_ball__003.jpg\n";

const OUTPUT: &str = "Der Hund springt hoch\n\
                      Das Blatt fällt\n\
                      Der Mann fängt den Ball\n";

const LEMMAS: &str = "springt\tspringen\tVERB\n\
                      fällt\tfällt\tVERB\n\
                      fängt\tfangen\tVERB\n\
                      Hund\tHund\tNOUN\n\
                      Blatt\tBlatt\tNOUN\n\
                      Ball\tBall\tNOUN\n";

fn write_fixtures(dir: &Path) {
    std::fs::write(dir.join("queries.csv"), QUERY_CSV).unwrap();
    std::fs::write(dir.join("images.txt"), IMAGES).unwrap();
    std::fs::write(dir.join("output.txt"), OUTPUT).unwrap();
    std::fs::write(dir.join("lemmas.tsv"), LEMMAS).unwrap();
}

fn cli_args(dir: &Path, lang: &str) -> Vec<String> {
    vec![
        "verb-accuracy".to_string(),
        dir.join("output.txt").display().to_string(),
        "--images".to_string(),
        dir.join("images.txt").display().to_string(),
        "--querydict".to_string(),
        dir.join("queries.csv").display().to_string(),
        "--lang".to_string(),
        lang.to_string(),
        "--lemmatizer".to_string(),
        "lookup".to_string(),
        "--lemma-table".to_string(),
        dir.join("lemmas.tsv").display().to_string(),
    ]
}

/// 辞書・画像一覧・出力ファイルを通しで評価
#[test]
fn test_evaluate_end_to_end() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());

    let mut lemmatizer = LookupLemmatizer::from_file(&dir.path().join("lemmas.tsv")).unwrap();
    let inputs = EvalInputs {
        input: &dir.path().join("output.txt"),
        images: &dir.path().join("images.txt"),
        querydict: &dir.path().join("queries.csv"),
    };

    let evaluation = driver::evaluate(
        Language::German,
        &mut lemmatizer,
        inputs,
        &CorrectionTable::builtin(),
        false,
    )
    .unwrap();

    // springen: 一致 / fällt→fallen: 補正で一致 / fangen: 不一致
    assert_eq!(evaluation.total, 3);
    assert_eq!(evaluation.correct, 2);
    let matched: Vec<bool> = evaluation.items.iter().map(|i| i.matched).collect();
    assert_eq!(matched, vec![true, true, false]);
    assert_eq!(evaluation.items[2].image, "a_man_blocks_a_ball__003.jpg");
    assert_eq!(evaluation.items[2].gold, "abblocken");
}

/// 英語では verb 列を正解にする
#[test]
fn test_evaluate_english_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());
    std::fs::write(
        dir.path().join("output.txt"),
        "The dog jumps\nThe leaf falls\nHe blocks it\n",
    )
    .unwrap();

    let mut lemmatizer = LookupLemmatizer::from_tsv_str(
        "jumps\tjump\tVERB\nfalls\tfall\tVERB\nblocks\tblock\tNOUN\n",
        "test",
    )
    .unwrap();
    let inputs = EvalInputs {
        input: &dir.path().join("output.txt"),
        images: &dir.path().join("images.txt"),
        querydict: &dir.path().join("queries.csv"),
    };

    let evaluation = driver::evaluate(
        Language::English,
        &mut lemmatizer,
        inputs,
        &CorrectionTable::builtin(),
        false,
    )
    .unwrap();
    assert_eq!(evaluation.correct, 2);
    assert_eq!(
        evaluation.summary_line().unwrap(),
        format!("en verb translation accuracy: {:?}", 100.0 * (2.0_f64 / 3.0))
    );
}

/// 辞書にないクエリの画像はエラー
#[test]
fn test_evaluate_unknown_query() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());
    std::fs::write(dir.path().join("images.txt"), "a_cat_sleeps__001.jpg\n").unwrap();

    let mut lemmatizer = LookupLemmatizer::from_tsv_str("", "empty").unwrap();
    let inputs = EvalInputs {
        input: &dir.path().join("output.txt"),
        images: &dir.path().join("images.txt"),
        querydict: &dir.path().join("queries.csv"),
    };

    let err = driver::evaluate(
        Language::German,
        &mut lemmatizer,
        inputs,
        &CorrectionTable::builtin(),
        false,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        VerbAccuracyError::Common(verb_accuracy_common::Error::UnknownQuery(_))
    ));
}

/// 入力ファイルがない場合
#[test]
fn test_evaluate_missing_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());

    let mut lemmatizer = LookupLemmatizer::from_tsv_str("", "empty").unwrap();
    let inputs = EvalInputs {
        input: &dir.path().join("missing.txt"),
        images: &dir.path().join("images.txt"),
        querydict: &dir.path().join("queries.csv"),
    };

    let err = driver::evaluate(
        Language::German,
        &mut lemmatizer,
        inputs,
        &CorrectionTable::builtin(),
        false,
    )
    .unwrap_err();
    assert!(matches!(err, VerbAccuracyError::FileNotFound(_)));
}

/// 未対応言語は案内のみで採点しない
#[test]
fn test_run_unsupported_language() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());

    let cli = Cli::parse_from(cli_args(dir.path(), "fr"));
    let result = driver::run(&cli, || Ok(Config::default())).unwrap();
    assert!(result.is_none());
}

/// 未対応言語では設定を読み込まない（壊れた設定でも案内のみで終了）
#[test]
fn test_run_unsupported_language_skips_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());

    let cli = Cli::parse_from(cli_args(dir.path(), "fr"));
    let result = driver::run(&cli, || {
        Err(VerbAccuracyError::Config("ホームディレクトリが見つかりません".to_string()))
    })
    .unwrap();
    assert!(result.is_none());
}

/// 対応言語では設定読み込みの失敗がそのまま返る
#[test]
fn test_run_supported_language_propagates_config_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());

    let cli = Cli::parse_from(cli_args(dir.path(), "de"));
    let err = driver::run(&cli, || Err(VerbAccuracyError::Config("壊れた設定".to_string())))
        .unwrap_err();
    assert!(matches!(err, VerbAccuracyError::Config(_)));
}

/// CLI引数からの実行（lookupバックエンド・レポート・キャッシュ）
#[test]
fn test_run_with_report_and_cache() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());

    let mut args = cli_args(dir.path(), "de");
    let report_path = dir.path().join("report.json");
    args.push("--report".to_string());
    args.push(report_path.display().to_string());
    args.push("--use-cache".to_string());

    let cli = Cli::parse_from(args);
    let evaluation = driver::run(&cli, || Ok(Config::default()))
        .unwrap()
        .expect("de should be scored");
    assert_eq!(evaluation.correct, 2);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["total"], 3);
    assert_eq!(report["items"].as_array().unwrap().len(), 3);

    // キャッシュは入力ファイルと同じフォルダに作られる
    let cache = LemmaCache::load(dir.path());
    assert_eq!(cache.len(), 3);
}

/// 設定の補正テーブルが採点に反映される
#[test]
fn test_run_with_config_corrections() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());

    let mut config = Config::default();
    config
        .corrections
        .insert("fangen".to_string(), "abblocken".to_string());

    let cli = Cli::parse_from(cli_args(dir.path(), "de"));
    let evaluation = driver::run(&cli, || Ok(config)).unwrap().unwrap();
    assert_eq!(evaluation.correct, 3);
}

/// 空の出力ファイルは正解率を計算できずエラー
#[test]
fn test_run_empty_output_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_fixtures(dir.path());
    std::fs::write(dir.path().join("output.txt"), "").unwrap();

    let cli = Cli::parse_from(cli_args(dir.path(), "de"));
    let err = driver::run(&cli, || Ok(Config::default())).unwrap_err();
    assert!(matches!(
        err,
        VerbAccuracyError::Common(verb_accuracy_common::Error::EmptyCandidates)
    ));
}
