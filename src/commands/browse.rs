//! owo browse コマンド
//!
//! TUI で表情を閲覧する。

use super::Context;
use crate::error::GalleryError;
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {}

pub async fn run(_args: Args, ctx: &Context) -> Result<(), String> {
    let records = ctx.load_records().await?;
    tui::run_gallery(records).map_err(|e| GalleryError::Tui(e.to_string()).to_string())
}
