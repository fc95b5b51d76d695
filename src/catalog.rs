//! 表情カタログ
//!
//! 生のカテゴリ/アイテム構造と、表示用に平坦化したレコードを扱う。
//!
//! - `normalize`: 生カタログ → `DisplayRecord` 列
//! - `category_name`: カテゴリキー → 表示名
//! - `navigation`: カテゴリナビゲーションの列挙

mod category_name;
mod navigation;
mod normalize;

pub use category_name::category_display_name;
pub use navigation::{category_keys, CategoryEntry};
pub use normalize::{format_name, normalize};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// カタログ JSON 上のカテゴリ
///
/// `type` などの未知フィールドは無視する。`items` が無い場合は空として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<RawItem>,
}

/// カタログ JSON 上の表情アイテム
///
/// `key` / `val` が欠けていても弾かず通す。欠落・`null` は空文字列、
/// 文字列以外の値は JSON 表記の文字列になる。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub val: String,
}

/// 任意の JSON 値を文字列として受け取る
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// 表示用の平坦化レコード
///
/// 生成後は不変。`id` の一意性は入力データに委ねる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    #[serde(rename = "categoryName")]
    pub category_name: String,
}

/// カタログ全体のアイテム数
pub fn item_count(categories: &[RawCategory]) -> usize {
    categories.iter().map(|c| c.items.len()).sum()
}
