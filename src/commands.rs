pub mod browse;
pub mod categories;
pub mod generate;
pub mod list;
pub mod show;

use crate::catalog::{normalize, DisplayRecord};
use crate::cli::{Cli, Command};
use crate::config::GalleryConfig;
use crate::source::load_catalog;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let config = GalleryConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    let ctx = Context {
        config,
        catalog: cli.catalog,
    };

    match cli.command {
        Command::List(args) => list::run(args, &ctx).await,
        Command::Categories(args) => categories::run(args, &ctx).await,
        Command::Show(args) => show::run(args, &ctx).await,
        Command::Browse(args) => browse::run(args, &ctx).await,
        Command::Generate(args) => generate::run(args, &ctx).await,
    }
}

/// コマンド共通の実行コンテキスト
pub struct Context {
    pub config: GalleryConfig,
    /// `--catalog` の値
    pub catalog: Option<String>,
}

impl Context {
    /// カタログを読み込み、表示用レコードへ変換する
    pub async fn load_records(&self) -> Result<Vec<DisplayRecord>, String> {
        let source = self.config.catalog_source(self.catalog.as_deref());
        let raw = load_catalog(&source, &self.config.http())
            .await
            .map_err(|e| {
                if e.is_load_failure() {
                    format!("Failed to load catalog [{}]: {}", e.code(), e)
                } else {
                    e.to_string()
                }
            })?;
        Ok(normalize(&raw))
    }
}
