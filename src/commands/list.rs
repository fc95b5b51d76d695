//! owo list コマンド
//!
//! カテゴリと検索語で絞り込んだ表情を表示する。

use super::Context;
use crate::catalog::DisplayRecord;
use crate::filter::{filter_records, CategoryFilter};
use crate::output::ResultSummary;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Category key to show ("all" for every category)
    #[arg(long, short, default_value = CategoryFilter::SENTINEL)]
    pub category: String,

    /// Case-insensitive search over name and category name
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only emoji ids
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let records = ctx.load_records().await?;

    let category = CategoryFilter::parse(&args.category);
    let visible = filter_records(&records, &category, args.query.trim());

    if args.json {
        print_json(&visible)
    } else if args.simple {
        print_simple(&visible);
        Ok(())
    } else {
        print_table(&visible, records.len());
        Ok(())
    }
}

fn print_table(records: &[&DisplayRecord], total_count: usize) {
    if !records.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Name", "Category", "ID", "Image"]);

        for record in records {
            table.add_row(vec![
                record.name.as_str(),
                record.category_name.as_str(),
                record.id.as_str(),
                record.image.as_str(),
            ]);
        }

        println!("{table}");
    }

    println!("{}", ResultSummary::format(records.len(), total_count));
}

fn print_json(records: &[&DisplayRecord]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(records)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize emoji: {}", e))
}

fn print_simple(records: &[&DisplayRecord]) {
    for record in records {
        println!("{}", record.id);
    }
}
