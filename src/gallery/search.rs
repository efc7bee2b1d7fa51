//! 検索 URL の組み立て

use crate::api::{Endpoint, Resource};
use crate::model::SearchFilter;
use clap::ValueEnum;

/// フィルタ入力から作品検索の URL を作る
///
/// 3 つのパラメータは空でも必ず付ける。空文字列は API 側で
/// 「絞り込みなし」として扱われる。
pub fn search_url(endpoint: &Endpoint, filter: &SearchFilter) -> String {
    endpoint.url(
        Resource::Object,
        &[
            ("classification", &filter.classification),
            ("century", &filter.century),
            ("keyword", &filter.keyword),
        ],
    )
}

/// 詳細ビューからリンクで絞り込めるファセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FacetField {
    Culture,
    Style,
    Technique,
    Medium,
    Person,
    Department,
    Division,
    Creditline,
}

impl FacetField {
    /// クエリパラメータ名
    pub fn param(&self) -> &'static str {
        match self {
            FacetField::Culture => "culture",
            FacetField::Style => "style",
            FacetField::Technique => "technique",
            FacetField::Medium => "medium",
            FacetField::Person => "person",
            FacetField::Department => "department",
            FacetField::Division => "division",
            FacetField::Creditline => "creditline",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            FacetField::Culture => "Culture",
            FacetField::Style => "Style",
            FacetField::Technique => "Technique",
            FacetField::Medium => "Medium",
            FacetField::Person => "Person",
            FacetField::Department => "Department",
            FacetField::Division => "Division",
            FacetField::Creditline => "Creditline",
        }
    }
}

/// ファセット値で絞り込む URL（`/object?apikey=..&medium=Bronze`）
pub fn facet_url(endpoint: &Endpoint, field: FacetField, value: &str) -> String {
    endpoint.url(Resource::Object, &[(field.param(), value)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::new("https://api.harvardartmuseums.org", "KEY").unwrap()
    }

    #[test]
    fn test_search_url_all_filters() {
        let filter = SearchFilter::new("Paintings", "", "cat");
        assert_eq!(
            search_url(&endpoint(), &filter),
            "https://api.harvardartmuseums.org/object?apikey=KEY&classification=Paintings&century=&keyword=cat"
        );
    }

    #[test]
    fn test_search_url_empty_filter_keeps_every_param() {
        let url = search_url(&endpoint(), &SearchFilter::default());
        assert!(url.ends_with("/object?apikey=KEY&classification=&century=&keyword="));
    }

    #[test]
    fn test_search_url_encodes_spaces() {
        let filter = SearchFilter::new("", "19th century", "");
        let url = search_url(&endpoint(), &filter);
        assert!(url.contains("century=19th+century"), "url was: {}", url);
    }

    #[test]
    fn test_facet_url() {
        assert_eq!(
            facet_url(&endpoint(), FacetField::Medium, "Bronze"),
            "https://api.harvardartmuseums.org/object?apikey=KEY&medium=Bronze"
        );
    }
}

#[cfg(test)]
#[path = "search_proptests.rs"]
mod proptests;
