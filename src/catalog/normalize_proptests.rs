use super::*;
use crate::catalog::{item_count, RawItem};
use proptest::prelude::*;

/// カテゴリ名に使える文字列
fn category_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("qingzhu".to_string()),
        Just("liushen".to_string()),
        Just("blobcat".to_string()),
        "[a-z]{1,8}",
    ]
}

fn item_strategy() -> impl Strategy<Value = RawItem> {
    ("[a-zA-Z_-]{0,16}", "[a-z./]{0,12}").prop_map(|(key, val)| RawItem { key, val })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<RawCategory>> {
    prop::collection::vec(
        (
            category_name_strategy(),
            prop::collection::vec(item_strategy(), 0..6),
        )
            .prop_map(|(name, items)| RawCategory { name, items }),
        0..6,
    )
}

proptest! {
    /// 平坦化でアイテム数が失われない
    #[test]
    fn prop_normalize_preserves_count(catalog in catalog_strategy()) {
        prop_assert_eq!(normalize(&catalog).len(), item_count(&catalog));
    }

    /// カテゴリ順 → アイテム順が保たれる
    #[test]
    fn prop_normalize_preserves_order(catalog in catalog_strategy()) {
        let expected: Vec<(String, String, String)> = catalog
            .iter()
            .flat_map(|c| c.items.iter().map(move |i| (c.name.clone(), i.key.clone(), i.val.clone())))
            .collect();
        let actual: Vec<(String, String, String)> = normalize(&catalog)
            .into_iter()
            .map(|r| (r.category, r.id, r.image))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// 表示名は前後に空白を持たず、`_` を含まない
    #[test]
    fn prop_format_name_is_trimmed_without_underscores(key in "[a-zA-Z_-]{0,24}") {
        let name = format_name(&key);
        prop_assert_eq!(name.trim(), name.as_str());
        prop_assert!(!name.contains('_'));
    }
}
