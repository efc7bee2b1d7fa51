//! 結果一覧のプレビューカード

use crate::model::{present, ArtworkRecord};
use std::sync::Arc;

/// 1 件分のプレビューカード
///
/// 表示用フィールドはそれぞれ独立に省略される。元のレコードは
/// 同じ割り当てを共有するので、選択時に再取得は不要。
#[derive(Debug, Clone)]
pub struct PreviewCard {
    pub image: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    record: Arc<ArtworkRecord>,
}

impl PreviewCard {
    pub fn render(record: Arc<ArtworkRecord>) -> Self {
        Self {
            image: present(&record.primaryimageurl).map(str::to_string),
            title: present(&record.title).map(str::to_string),
            description: present(&record.description).map(str::to_string),
            record,
        }
    }

    /// カードに紐づく元レコード
    pub fn record(&self) -> &Arc<ArtworkRecord> {
        &self.record
    }

    /// 表示できるフィールドが一つもない
    pub fn is_blank(&self) -> bool {
        self.image.is_none() && self.title.is_none() && self.description.is_none()
    }
}

/// ページのレコードを返却順のままカードにする
pub fn render_previews(records: Vec<ArtworkRecord>) -> Vec<PreviewCard> {
    records
        .into_iter()
        .map(|record| PreviewCard::render(Arc::new(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: Option<&str>, description: Option<&str>, image: Option<&str>) -> ArtworkRecord {
        ArtworkRecord {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            primaryimageurl: image.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_all_fields() {
        let card = PreviewCard::render(Arc::new(record(
            Some("Cat"),
            Some("A sleeping cat"),
            Some("https://img/1.jpg"),
        )));

        assert_eq!(card.title.as_deref(), Some("Cat"));
        assert_eq!(card.description.as_deref(), Some("A sleeping cat"));
        assert_eq!(card.image.as_deref(), Some("https://img/1.jpg"));
    }

    #[test]
    fn test_falsy_fields_omitted_independently() {
        let card = PreviewCard::render(Arc::new(record(Some(""), None, Some("https://img/2.jpg"))));

        assert!(card.title.is_none());
        assert!(card.description.is_none());
        assert!(card.image.is_some());
        assert!(!card.is_blank());
    }

    #[test]
    fn test_card_shares_source_record() {
        let source = Arc::new(record(Some("Cat"), None, None));
        let card = PreviewCard::render(Arc::clone(&source));

        assert!(Arc::ptr_eq(card.record(), &source));
    }

    #[test]
    fn test_render_previews_keeps_order() {
        let cards = render_previews(vec![
            record(Some("first"), None, None),
            record(None, None, None),
            record(Some("third"), None, None),
        ]);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title.as_deref(), Some("first"));
        assert!(cards[1].is_blank());
        assert_eq!(cards[2].title.as_deref(), Some("third"));
    }
}
