use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "verb-accuracy")]
#[command(about = "機械翻訳の動詞訳語正解率を評価", long_about = None)]
pub struct Cli {
    /// 評価対象の翻訳出力ファイル（1行1訳）
    #[arg(required = true)]
    pub input: PathBuf,

    /// 評価画像のファイル名一覧
    #[arg(long, default_value = "images.txt")]
    pub images: PathBuf,

    /// クエリ→訳語の対応CSV
    #[arg(long, default_value = "gold_german_query_classes.csv")]
    pub querydict: PathBuf,

    /// 評価言語 (en/de)
    #[arg(long, default_value = "de")]
    pub lang: String,

    /// 詳細ログと不一致行を出力
    #[arg(short, long)]
    pub verbose: bool,

    /// 見出し語化バックエンド
    #[arg(long, value_enum, default_value_t = LemmatizerBackend::Spacy)]
    pub lemmatizer: LemmatizerBackend,

    /// 見出し語表（lookupバックエンド用、TSV）
    #[arg(long)]
    pub lemma_table: Option<PathBuf>,

    /// 見出し語化結果をキャッシュ（入力ファイルと同じフォルダ）
    #[arg(long)]
    pub use_cache: bool,

    /// 行ごとの判定結果をJSONで出力
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LemmatizerBackend {
    /// spaCy（Pythonサブプロセス）
    Spacy,
    /// 見出し語表の引き当て
    Lookup,
}
