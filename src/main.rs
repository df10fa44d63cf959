use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use verb_accuracy::cli::Cli;
use verb_accuracy::config::Config;
use verb_accuracy::driver;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 標準出力は結果行専用。ログは標準エラーへ
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    driver::run(&cli, Config::load)
        .with_context(|| format!("{} の評価に失敗しました", cli.input.display()))?;

    Ok(())
}
