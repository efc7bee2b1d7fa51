//! 選択した作品の詳細ビュー

use super::search::{facet_url, FacetField};
use crate::api::Endpoint;
use crate::model::{present, ArtworkRecord, Image};
use std::sync::Arc;

/// 事実行に付くリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactLink {
    /// リンクなし
    None,
    /// 値で絞り込む検索リンク
    Search {
        field: FacetField,
        value: String,
        url: String,
    },
    /// mailto（プラットフォーム側に任せる）
    Mailto(String),
}

impl FactLink {
    /// 検索をやり直すリンクか
    pub fn is_search(&self) -> bool {
        matches!(self, FactLink::Search { .. })
    }

    /// リンク先（mailto は `mailto:` 付き）
    pub fn href(&self) -> Option<String> {
        match self {
            FactLink::None => None,
            FactLink::Search { url, .. } => Some(url.clone()),
            FactLink::Mailto(address) => Some(format!("mailto:{}", address)),
        }
    }
}

/// ラベル付きの事実行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub content: String,
    pub link: FactLink,
}

/// リンクなしの事実行。内容が偽なら行ごと出さない
pub fn fact(label: &'static str, content: Option<&str>) -> Option<Fact> {
    let content = content.filter(|c| !c.trim().is_empty())?;
    Some(Fact {
        label,
        content: content.to_string(),
        link: FactLink::None,
    })
}

/// 検索リンク付きの事実行
pub fn facet_fact(endpoint: &Endpoint, field: FacetField, content: Option<&str>) -> Option<Fact> {
    let mut fact = fact(field.label(), content)?;
    fact.link = FactLink::Search {
        field,
        value: fact.content.clone(),
        url: facet_url(endpoint, field, &fact.content),
    };
    Some(fact)
}

/// mailto リンク付きの連絡先
pub fn contact_fact(content: Option<&str>) -> Option<Fact> {
    let mut fact = fact("Contact", content)?;
    fact.link = FactLink::Mailto(fact.content.clone());
    Some(fact)
}

/// 写真一覧
///
/// 画像リストに URL があればそれを全部、なければ代表画像、それもなければ空。
pub fn photos(images: Option<&[Image]>, primary: Option<&str>) -> Vec<String> {
    let urls: Vec<String> = images
        .unwrap_or_default()
        .iter()
        .filter_map(|image| present(&image.baseimageurl).map(str::to_string))
        .collect();

    if !urls.is_empty() {
        return urls;
    }

    primary
        .filter(|p| !p.trim().is_empty())
        .map(|p| vec![p.to_string()])
        .unwrap_or_default()
}

/// 詳細ビュー
#[derive(Debug, Clone)]
pub struct Feature {
    pub title: Option<String>,
    pub dated: Option<String>,
    pub facts: Vec<Fact>,
    pub photos: Vec<String>,
    record: Arc<ArtworkRecord>,
}

impl Feature {
    /// 表示元のレコード
    pub fn record(&self) -> &Arc<ArtworkRecord> {
        &self.record
    }

    /// リンク付きの事実行だけを順に返す
    pub fn links(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter().filter(|f| f.link != FactLink::None)
    }
}

/// レコードから詳細ビューを組み立てる
pub fn render_feature(endpoint: &Endpoint, record: Arc<ArtworkRecord>) -> Feature {
    let r = record.as_ref();
    let mut facts = Vec::new();

    facts.extend(fact("Description", present(&r.description)));
    facts.extend(facet_fact(endpoint, FacetField::Culture, present(&r.culture)));
    facts.extend(facet_fact(endpoint, FacetField::Style, present(&r.style)));
    facts.extend(facet_fact(endpoint, FacetField::Technique, present(&r.technique)));
    facts.extend(facet_fact(endpoint, FacetField::Medium, present(&r.medium)));
    facts.extend(fact("Dimensions", present(&r.dimensions)));
    for person in r.people.as_deref().unwrap_or_default() {
        facts.extend(facet_fact(
            endpoint,
            FacetField::Person,
            present(&person.displayname),
        ));
    }
    facts.extend(facet_fact(endpoint, FacetField::Department, present(&r.department)));
    facts.extend(facet_fact(endpoint, FacetField::Division, present(&r.division)));
    facts.extend(contact_fact(present(&r.contact)));
    facts.extend(facet_fact(endpoint, FacetField::Creditline, present(&r.creditline)));

    Feature {
        title: present(&r.title).map(str::to_string),
        dated: present(&r.dated).map(str::to_string),
        facts,
        photos: photos(r.images.as_deref(), present(&r.primaryimageurl)),
        record,
    }
}

#[cfg(test)]
#[path = "feature_test.rs"]
mod tests;
