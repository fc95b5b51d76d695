//! 表情カタログ生成
//!
//! 表情フォルダを走査して Artalk / Twikoo 用のカタログ JSON を生成する。
//!
//! - `scan`: フォルダ直下のファイル列挙
//! - `artalk`: `[{name, type, items:[{key, val}]}]` 形式
//! - `twikoo`: `{表示名: {type, container:[{text, icon}]}}` 形式

mod artalk;
mod scan;
mod twikoo;

pub use artalk::{generate_artalk, ArtalkGroup, DEFAULT_ARTALK_BASE_URL, DEFAULT_ARTALK_OUTPUT};
pub use twikoo::{
    generate_twikoo, TwikooOrigin, DEFAULT_TWIKOO_BASE_URL, DEFAULT_TWIKOO_ORIGIN,
    DEFAULT_TWIKOO_OUTPUT,
};

use crate::error::{GalleryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// 既定の表情フォルダ
pub const DEFAULT_FOLDERS: &[&str] = &["qingzhu", "liushen", "blobcat", "bilibili", "zhheo"];

/// 元データの URL から余計な文字を除去（バッククォート・前後空白）
fn clean_url(value: &str) -> String {
    value.replace('`', "").trim().to_string()
}

/// 元データ（既存の出力）を読み込む
///
/// ファイルが無い・壊れている場合は警告を出して `None`。
pub fn load_origin<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "origin file not found");
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read origin file");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(origin) => {
            tracing::info!(path = %path.display(), "loaded origin data");
            Some(origin)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "origin file is malformed");
            None
        }
    }
}

/// JSON を整形して書き出す（親ディレクトリは作成する）
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(value)
        .map_err(|e| GalleryError::Generate(format!("Failed to serialize JSON: {}", e)))?;
    std::fs::write(path, content)?;

    tracing::info!(path = %path.display(), "wrote catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_url_strips_backticks_and_whitespace() {
        assert_eq!(
            clean_url(" `https://cdn.example.com/a.png` "),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn load_origin_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let origin: Option<Vec<ArtalkGroup>> = load_origin(&dir.path().join("none.json"));
        assert!(origin.is_none());
    }

    #[test]
    fn load_origin_malformed_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let origin: Option<Vec<ArtalkGroup>> = load_origin(&path);
        assert!(origin.is_none());
    }

    #[test]
    fn write_json_creates_parent_and_keeps_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".json").join("out.json");
        write_json(&path, &serde_json::json!({ "name": "青竹君" })).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("青竹君"));
        assert!(content.contains("\n  \"name\""));
    }
}
