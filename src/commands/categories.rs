//! owo categories コマンド

use super::Context;
use crate::catalog::category_keys;
use crate::filter::filter_records;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryRow {
    key: String,
    name: String,
    count: usize,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let records = ctx.load_records().await?;

    let rows: Vec<CategoryRow> = category_keys(&records)
        .into_iter()
        .map(|entry| CategoryRow {
            count: filter_records(&records, &entry.filter, "").len(),
            key: entry.filter.to_string(),
            name: entry.label,
        })
        .collect();

    if args.json {
        return serde_json::to_string_pretty(&rows)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize categories: {}", e));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Name", "Count"]);
    for row in &rows {
        table.add_row(vec![row.key.clone(), row.name.clone(), row.count.to_string()]);
    }
    println!("{table}");

    Ok(())
}
