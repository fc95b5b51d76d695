//! owo show コマンド
//!
//! 1 件の表情をプレビュー表示する。

use super::Context;
use crate::error::GalleryError;
use crate::filter::find_by_id;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Emoji id (the catalog key)
    pub id: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let records = ctx.load_records().await?;

    let record = find_by_id(&records, &args.id)
        .ok_or_else(|| GalleryError::EmojiNotFound(args.id.clone()).to_string())?;

    if args.json {
        return serde_json::to_string_pretty(record)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize emoji: {}", e));
    }

    println!("{}", record.name.bold());
    println!("  分类：{}", record.category_name);
    println!("  Image: {}", record.image.cyan());
    println!("  ID:    {}", record.id);

    Ok(())
}
