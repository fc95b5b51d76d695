use super::*;
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["qingzhu", "liushen", "blobcat", "mystery"];

fn record_strategy() -> impl Strategy<Value = DisplayRecord> {
    (0..CATEGORIES.len(), "[a-zA-Z ]{0,10}", "[a-z]{0,6}").prop_map(|(idx, name, id)| {
        let category = CATEGORIES[idx].to_string();
        DisplayRecord {
            id,
            name,
            image: String::new(),
            category_name: crate::catalog::category_display_name(&category).to_string(),
            category,
        }
    })
}

fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        (0..CATEGORIES.len()).prop_map(|idx| CategoryFilter::Key(CATEGORIES[idx].to_string())),
        Just(CategoryFilter::Key("absent".to_string())),
    ]
}

/// 参照先のインデックス列に変換（同一性の比較用）
fn positions(records: &[DisplayRecord], subset: &[&DisplayRecord]) -> Vec<usize> {
    subset
        .iter()
        .map(|s| {
            records
                .iter()
                .position(|r| std::ptr::eq(r, *s))
                .expect("subset element must point into records")
        })
        .collect()
}

proptest! {
    /// 結果は入力の部分列（参照の同一性・順序を保つ）
    #[test]
    fn prop_result_is_ordered_subset(
        records in prop::collection::vec(record_strategy(), 0..20),
        category in category_strategy(),
        query in "[a-zA-Z ]{0,3}",
    ) {
        let result = filter_records(&records, &category, &query);
        let idx = positions(&records, &result);
        prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    /// All + 空検索語は恒等
    #[test]
    fn prop_all_and_empty_query_is_identity(
        records in prop::collection::vec(record_strategy(), 0..20),
    ) {
        let result = filter_records(&records, &CategoryFilter::All, "");
        let idx = positions(&records, &result);
        prop_assert_eq!(idx, (0..records.len()).collect::<Vec<_>>());
    }

    /// 冪等性
    #[test]
    fn prop_filter_is_idempotent(
        records in prop::collection::vec(record_strategy(), 0..20),
        category in category_strategy(),
        query in "[a-zA-Z ]{0,3}",
    ) {
        let once: Vec<DisplayRecord> = filter_records(&records, &category, &query)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<DisplayRecord> = filter_records(&once, &category, &query)
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(once, twice);
    }

    /// カテゴリ絞り込みと検索語絞り込みは可換
    #[test]
    fn prop_category_and_query_commute(
        records in prop::collection::vec(record_strategy(), 0..20),
        category in category_strategy(),
        query in "[a-zA-Z ]{0,3}",
    ) {
        let by_category: Vec<DisplayRecord> = filter_records(&records, &category, "")
            .into_iter()
            .cloned()
            .collect();
        let category_first: Vec<DisplayRecord> =
            filter_records(&by_category, &CategoryFilter::All, &query)
                .into_iter()
                .cloned()
                .collect();

        let by_query: Vec<DisplayRecord> = filter_records(&records, &CategoryFilter::All, &query)
            .into_iter()
            .cloned()
            .collect();
        let query_first: Vec<DisplayRecord> = filter_records(&by_query, &category, "")
            .into_iter()
            .cloned()
            .collect();

        let combined: Vec<DisplayRecord> = filter_records(&records, &category, &query)
            .into_iter()
            .cloned()
            .collect();

        prop_assert_eq!(&category_first, &query_first);
        prop_assert_eq!(&category_first, &combined);
    }

    /// 同じ入力なら同じ結果
    #[test]
    fn prop_filter_is_deterministic(
        records in prop::collection::vec(record_strategy(), 0..20),
        category in category_strategy(),
        query in "[a-zA-Z ]{0,3}",
    ) {
        let a = positions(&records, &filter_records(&records, &category, &query));
        let b = positions(&records, &filter_records(&records, &category, &query));
        prop_assert_eq!(a, b);
    }
}
