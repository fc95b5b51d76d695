//! カテゴリ表示名

/// 既知カテゴリキーと表示名の対応表
const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("qingzhu", "青竹"),
    ("liushen", "六神"),
    ("blobcat", "Blob Cat"),
    ("bilibili", "哔哩哔哩"),
    ("zhheo", "Zhheo"),
];

/// カテゴリキーの表示名を返す（未知のキーはそのまま）
pub fn category_display_name(key: &str) -> &str {
    CATEGORY_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
        .unwrap_or(key)
}
