//! フィルタロジック
//!
//! 表示用レコード列をカテゴリと検索語で絞り込む。
//! 現在のカテゴリ・検索語は呼び出し側（CLI 引数 / TUI の Model）が保持する。

use crate::catalog::DisplayRecord;
use std::fmt;

/// カテゴリ絞り込み条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// センチネル: カテゴリで絞り込まない
    #[default]
    All,
    /// 生のカテゴリキーと完全一致
    Key(String),
}

impl CategoryFilter {
    /// センチネルの文字列表現
    pub const SENTINEL: &'static str = "all";

    /// センチネルの表示ラベル
    pub const ALL_LABEL: &'static str = "全部";

    /// 文字列から変換（`"all"` はセンチネル）
    pub fn parse(value: &str) -> Self {
        if value == Self::SENTINEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Key(value.to_string())
        }
    }

    /// レコードがこの条件に一致するか
    pub fn matches(&self, record: &DisplayRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Key(key) => record.category == *key,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::SENTINEL),
            CategoryFilter::Key(key) => f.write_str(key),
        }
    }
}

/// カテゴリと検索語でレコードを絞り込む
///
/// - カテゴリが `All` 以外なら `category` 完全一致で絞り込み
/// - `query` が空でなければ `name` と `category_name` を case-insensitive な部分一致で検索
/// - 入力の順序を保ち、入力への参照を返す
pub fn filter_records<'a>(
    records: &'a [DisplayRecord],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a DisplayRecord> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|r| category.matches(r))
        .filter(|r| query.is_empty() || matches_query(r, &query))
        .collect()
}

/// 小文字化済みの検索語がレコードに含まれるか
fn matches_query(record: &DisplayRecord, lowered_query: &str) -> bool {
    record.name.to_lowercase().contains(lowered_query)
        || record.category_name.to_lowercase().contains(lowered_query)
}

/// ID でレコードを検索する（重複時は先頭）
pub fn find_by_id<'a>(records: &'a [DisplayRecord], id: &str) -> Option<&'a DisplayRecord> {
    records.iter().find(|r| r.id == id)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;
