use super::*;
use proptest::prelude::*;
use reqwest::Url;

fn endpoint() -> Endpoint {
    Endpoint::new("https://api.harvardartmuseums.org", "KEY").unwrap()
}

/// フォームに入力され得る任意の文字列（空文字列・記号・非 ASCII を含む）
fn input_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ -~]{0,24}",
        "\\PC{0,12}",
    ]
}

proptest! {
    /// どの入力でも URL が組み立てられ、入力値がそのまま復元できる
    #[test]
    fn prop_search_url_is_total(
        classification in input_strategy(),
        century in input_strategy(),
        keyword in input_strategy()
    ) {
        let filter = SearchFilter::new(classification.clone(), century.clone(), keyword.clone());
        let url = search_url(&endpoint(), &filter);

        let parsed = Url::parse(&url).unwrap();
        prop_assert_eq!(parsed.path(), "/object");

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        // apikey が先頭、残り 3 つは空でも必ず付く
        prop_assert_eq!(
            pairs,
            vec![
                ("apikey".to_string(), "KEY".to_string()),
                ("classification".to_string(), classification),
                ("century".to_string(), century),
                ("keyword".to_string(), keyword),
            ]
        );
    }

    /// ファセット値もエンコードされて 1 つのパラメータに収まる
    #[test]
    fn prop_facet_url_keeps_value_intact(value in input_strategy()) {
        let url = facet_url(&endpoint(), FacetField::Culture, &value);
        let parsed = Url::parse(&url).unwrap();

        let culture: Vec<String> = parsed
            .query_pairs()
            .filter(|(k, _)| k == "culture")
            .map(|(_, v)| v.into_owned())
            .collect();
        prop_assert_eq!(culture, vec![value]);
    }
}
