//! owo generate コマンド
//!
//! 表情フォルダから Artalk / Twikoo 用のカタログ JSON を生成する。

use super::Context;
use crate::generate::{
    generate_artalk, generate_twikoo, load_origin, write_json, ArtalkGroup, TwikooOrigin,
    DEFAULT_ARTALK_BASE_URL, DEFAULT_ARTALK_OUTPUT, DEFAULT_FOLDERS, DEFAULT_TWIKOO_BASE_URL,
    DEFAULT_TWIKOO_ORIGIN, DEFAULT_TWIKOO_OUTPUT,
};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub format: Format,
}

#[derive(Debug, Subcommand)]
pub enum Format {
    /// Artalk 形式（ギャラリーのカタログと同じ形）
    Artalk(FormatArgs),
    /// Twikoo 形式
    Twikoo(FormatArgs),
}

#[derive(Debug, Parser)]
pub struct FormatArgs {
    /// Emoji folders to scan (default: config or built-in list)
    pub folders: Vec<String>,

    /// Base URL joined with "<folder>/<file>"
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output JSON path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Existing JSON whose names are reused for matching URLs
    #[arg(long)]
    pub origin: Option<PathBuf>,

    /// Directory that contains the emoji folders
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let generate = &ctx.config.generate;

    match args.format {
        Format::Artalk(args) => {
            let folders = resolve_folders(&args.folders, generate.folders.as_deref());
            let base_url = args
                .base_url
                .clone()
                .or_else(|| generate.artalk_base_url.clone())
                .unwrap_or_else(|| DEFAULT_ARTALK_BASE_URL.to_string());
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTALK_OUTPUT));
            // 既定では出力先自身を元データとして名前を引き継ぐ
            let origin_path = args.origin.clone().unwrap_or_else(|| output.clone());
            let origin: Option<Vec<ArtalkGroup>> = load_origin(&origin_path);

            let groups = generate_artalk(&args.root, &base_url, &folders, origin.as_deref());
            write_json(&output, &groups).map_err(|e| e.to_string())?;

            let items: usize = groups.iter().map(|g| g.items.len()).sum();
            report(&output, groups.len(), items);
        }
        Format::Twikoo(args) => {
            let folders = resolve_folders(&args.folders, generate.folders.as_deref());
            let base_url = args
                .base_url
                .clone()
                .or_else(|| generate.twikoo_base_url.clone())
                .unwrap_or_else(|| DEFAULT_TWIKOO_BASE_URL.to_string());
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TWIKOO_OUTPUT));
            let origin_path = args
                .origin
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TWIKOO_ORIGIN));
            let origin: Option<TwikooOrigin> = load_origin(&origin_path);

            let catalog = generate_twikoo(&args.root, &base_url, &folders, origin.as_ref());
            write_json(&output, &catalog).map_err(|e| e.to_string())?;

            let items: usize = catalog
                .categories
                .iter()
                .map(|(_, c)| c.container.len())
                .sum();
            report(&output, catalog.categories.len(), items);
        }
    }

    Ok(())
}

/// CLI 引数 > 設定ファイル > 既定のフォルダ一覧
fn resolve_folders(cli: &[String], config: Option<&[String]>) -> Vec<String> {
    if !cli.is_empty() {
        return cli.to_vec();
    }
    match config {
        Some(folders) if !folders.is_empty() => folders.to_vec(),
        _ => DEFAULT_FOLDERS.iter().map(|s| s.to_string()).collect(),
    }
}

fn report(output: &Path, categories: usize, items: usize) {
    println!(
        "{} Wrote {} categories, {} emoji to {}",
        "✓".green(),
        categories,
        items,
        output.display()
    );
}
