//! カテゴリナビゲーション

use super::{category_display_name, DisplayRecord};
use crate::filter::CategoryFilter;

/// ナビゲーション項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub filter: CategoryFilter,
    /// 表示ラベル（センチネルは「全部」）
    pub label: String,
}

/// センチネル + レコード中の重複なしカテゴリを初出順で列挙する
pub fn category_keys(records: &[DisplayRecord]) -> Vec<CategoryEntry> {
    let mut entries = vec![CategoryEntry {
        filter: CategoryFilter::All,
        label: CategoryFilter::ALL_LABEL.to_string(),
    }];

    for record in records {
        let seen = entries
            .iter()
            .any(|e| matches!(&e.filter, CategoryFilter::Key(k) if *k == record.category));
        if !seen {
            entries.push(CategoryEntry {
                filter: CategoryFilter::Key(record.category.clone()),
                label: category_display_name(&record.category).to_string(),
            });
        }
    }

    entries
}
