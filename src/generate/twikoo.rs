//! Twikoo 形式のカタログ生成

use super::clean_url;
use super::scan::scan_folder;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_TWIKOO_BASE_URL: &str = "https://owo.69b94fb6.er.aliyun-esa.net";
pub const DEFAULT_TWIKOO_OUTPUT: &str = ".json/twikoo-emoji.json";
pub const DEFAULT_TWIKOO_ORIGIN: &str = ".json/twikoo.json";

/// Twikoo 用のカテゴリ表示名
const TWIKOO_NAMES: &[(&str, &str)] = &[
    ("qingzhu", "青竹君"),
    ("blobcat", "可爱猫"),
    ("bilibili", "小电视"),
    ("liushen", "清羽酱"),
    ("zhheo", "张洪Heo"),
];

/// `<img src='...'>` から URL を取り出す
static ICON_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src=['"]([^'"]+)['"]"#).expect("valid icon regex"));

/// Twikoo の表情アイテム
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TwikooItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: String,
}

/// Twikoo の表情カテゴリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwikooCategory {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub container: Vec<TwikooItem>,
}

/// Twikoo カタログ
///
/// 表示名をキーとするオブジェクトとして、フォルダ順を保ったまま書き出す。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TwikooCatalog {
    pub categories: Vec<(String, TwikooCategory)>,
}

impl Serialize for TwikooCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, category) in &self.categories {
            map.serialize_entry(name, category)?;
        }
        map.end()
    }
}

impl TwikooCatalog {
    /// カテゴリを追加する（同じ表示名は最初の位置のまま内容を置き換える）
    pub fn insert(&mut self, name: String, category: TwikooCategory) {
        match self.categories.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = category,
            None => self.categories.push((name, category)),
        }
    }
}

/// 既存の Twikoo JSON（表示名 → カテゴリ、ファイル順）
pub type TwikooOrigin = serde_json::Map<String, serde_json::Value>;

/// フォルダ名の Twikoo 表示名（未知のフォルダはそのまま）
pub fn twikoo_display_name(folder: &str) -> &str {
    TWIKOO_NAMES
        .iter()
        .find(|(k, _)| *k == folder)
        .map(|(_, name)| *name)
        .unwrap_or(folder)
}

/// icon の HTML から画像 URL を抽出
fn icon_url(icon: &str) -> Option<String> {
    ICON_SRC
        .captures(icon)
        .and_then(|caps| caps.get(1))
        .map(|m| clean_url(m.as_str()))
}

/// 元データから URL → text の対応表を作る
///
/// ファイル順に走査し、同じ URL は後勝ち。形式の合わないカテゴリは無視する。
fn url_to_text(origin: &TwikooOrigin) -> HashMap<String, String> {
    origin
        .values()
        .filter_map(|value| serde_json::from_value::<TwikooCategory>(value.clone()).ok())
        .flat_map(|category| category.container.into_iter())
        .filter(|item| !item.icon.is_empty() && !item.text.is_empty())
        .filter_map(|item| icon_url(&item.icon).map(|url| (url, item.text)))
        .collect()
}

/// 表情フォルダから Twikoo カタログを生成する
///
/// - カテゴリ名はフォルダの Twikoo 表示名
/// - 元データに同じ URL があればその text を、無ければファイル名（拡張子なし）を使う
/// - 存在しないフォルダ・空のフォルダは出力しない
pub fn generate_twikoo(
    root: &Path,
    base_url: &str,
    folders: &[String],
    origin: Option<&TwikooOrigin>,
) -> TwikooCatalog {
    let texts = origin.map(url_to_text).unwrap_or_default();
    let base_url = base_url.trim_end_matches('/');

    let mut catalog = TwikooCatalog::default();
    for folder in folders {
        let Some(files) = scan_folder(&root.join(folder)) else {
            tracing::warn!(folder = %folder, "not a directory, skipped");
            continue;
        };

        let container: Vec<TwikooItem> = files
            .into_iter()
            .map(|file| {
                let url = format!("{}/{}/{}", base_url, folder, file.file_name);
                let text = texts.get(&url).cloned().unwrap_or(file.stem);
                TwikooItem {
                    text,
                    icon: format!("<img src='{}'>", url),
                }
            })
            .collect();

        if container.is_empty() {
            continue;
        }

        catalog.insert(
            twikoo_display_name(folder).to_string(),
            TwikooCategory {
                kind: "image".to_string(),
                container,
            },
        );
    }

    catalog
}

#[cfg(test)]
#[path = "twikoo_test.rs"]
mod tests;
