use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{browse, categories, generate, list, show};

#[derive(Debug, Parser)]
#[command(name = "owo")]
#[command(about = "Emoji gallery CLI", long_about = None)]
pub struct Cli {
    /// Catalog file path or http(s) URL (overrides OWO_CATALOG and config)
    #[arg(long, global = true, value_name = "SOURCE")]
    pub catalog: Option<String>,

    /// Config file path (default: ~/.owo/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 表情の一覧（カテゴリ・検索語で絞り込み）
    List(list::Args),

    /// カテゴリ一覧
    Categories(categories::Args),

    /// 表情の詳細表示
    Show(show::Args),

    /// TUI で表情を閲覧
    Browse(browse::Args),

    /// 表情フォルダからカタログ JSON を生成
    Generate(generate::Args),
}
