//! Artalk 形式のカタログ生成

use super::clean_url;
use super::scan::scan_folder;
use crate::catalog::RawItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_ARTALK_BASE_URL: &str = "https://cdn.jsdmirror.com/gh/scfcn/owo";
pub const DEFAULT_ARTALK_OUTPUT: &str = ".json/artalk-emoji.json";

/// Artalk の表情グループ
///
/// `items` はギャラリーが読み込む `RawItem` と同じ形。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtalkGroup {
    pub name: String,
    #[serde(rename = "type", default = "image_type")]
    pub kind: String,
    #[serde(default)]
    pub items: Vec<RawItem>,
}

fn image_type() -> String {
    "image".to_string()
}

/// 元データから URL → key の対応表を作る
///
/// key・val が空のアイテムは対応表に入れない。
fn url_to_key(origin: &[ArtalkGroup]) -> HashMap<String, String> {
    origin
        .iter()
        .flat_map(|group| group.items.iter())
        .filter(|item| !item.key.is_empty() && !item.val.is_empty())
        .map(|item| (clean_url(&item.val), item.key.clone()))
        .collect()
}

/// 表情フォルダから Artalk カタログを生成する
///
/// - `root` 配下の各フォルダ直下のファイルを 1 アイテムとする
/// - 元データに同じ URL があればその key を、無ければファイル名（拡張子なし）を使う
/// - 存在しないフォルダ・空のフォルダは出力しない
pub fn generate_artalk(
    root: &Path,
    base_url: &str,
    folders: &[String],
    origin: Option<&[ArtalkGroup]>,
) -> Vec<ArtalkGroup> {
    let keys = origin.map(url_to_key).unwrap_or_default();
    let base_url = base_url.trim_end_matches('/');

    folders
        .iter()
        .filter_map(|folder| {
            let Some(files) = scan_folder(&root.join(folder)) else {
                tracing::warn!(folder = %folder, "not a directory, skipped");
                return None;
            };

            let items: Vec<RawItem> = files
                .into_iter()
                .map(|file| {
                    let val = format!("{}/{}/{}", base_url, folder, file.file_name);
                    let key = keys.get(&val).cloned().unwrap_or(file.stem);
                    RawItem { key, val }
                })
                .collect();

            if items.is_empty() {
                return None;
            }

            tracing::debug!(folder = %folder, items = items.len(), "scanned folder");
            Some(ArtalkGroup {
                name: folder.clone(),
                kind: image_type(),
                items,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "artalk_test.rs"]
mod tests;
