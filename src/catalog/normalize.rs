//! 生カタログの平坦化

use super::{category_display_name, DisplayRecord, RawCategory};

/// 生カタログを表示用レコード列へ変換する
///
/// カテゴリ順 → アイテム順を保ったまま 1 アイテム 1 レコードで出力する。
pub fn normalize(categories: &[RawCategory]) -> Vec<DisplayRecord> {
    categories
        .iter()
        .flat_map(|category| {
            let category_name = category_display_name(&category.name);
            category.items.iter().map(move |item| DisplayRecord {
                id: item.key.clone(),
                name: format_name(&item.key),
                image: item.val.clone(),
                category: category.name.clone(),
                category_name: category_name.to_string(),
            })
        })
        .collect()
}

/// キーから表示名を生成する
///
/// - `-` で分割し、2 要素以上なら先頭（カテゴリ接頭辞）を除去
/// - 残りを空白で連結し、`_` を空白に置換
/// - ASCII 大文字の直前に空白を挿入
/// - 前後の空白を除去
///
/// `-` を含まないキーは接頭辞除去を行わない。
pub fn format_name(key: &str) -> String {
    let parts: Vec<&str> = key.split('-').collect();
    let rest = if parts.len() > 1 { &parts[1..] } else { &parts[..] };
    let joined = rest.join(" ");

    let mut name = String::with_capacity(joined.len() + 4);
    for c in joined.chars() {
        match c {
            '_' => name.push(' '),
            c if c.is_ascii_uppercase() => {
                name.push(' ');
                name.push(c);
            }
            c => name.push(c),
        }
    }

    name.trim().to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

#[cfg(test)]
#[path = "normalize_proptests.rs"]
mod proptests;
