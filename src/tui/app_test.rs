use crossterm::event::KeyCode;

use super::{update, Focus, Model, Msg};
use crate::api::fake::FakeApi;
use crate::api::Endpoint;
use crate::busy::BusyIndicator;
use crate::gallery::pagination::NavDirection;
use crate::gallery::prefetch::CategoryLists;
use crate::gallery::Gallery;
use crate::model::CategoryKind;
use serde_json::json;

/// テスト用の最小構成 Model を構築するヘルパー
fn make_model(focus: Focus) -> Model {
    let endpoint = Endpoint::new("https://api.harvardartmuseums.org", "KEY").unwrap();
    let mut model = Model::new(Gallery::new(endpoint, BusyIndicator::new()));
    model.focus = focus;
    model
}

fn with_categories(mut model: Model) -> Model {
    let lists = CategoryLists {
        centuries: serde_json::from_value(json!([
            {"name": "18th century"},
            {"name": "19th century"}
        ]))
        .unwrap(),
        classifications: serde_json::from_value(json!([
            {"name": "Paintings"},
            {"name": "Prints"}
        ]))
        .unwrap(),
    };
    update(&mut model, Msg::CategoriesLoaded(Ok(lists)));
    model
}

fn object_api() -> FakeApi {
    FakeApi::new()
        .route(
            "medium=Bronze",
            json!({"info": {"page": 1}, "records": [{"title": "Bell"}]}),
        )
        .route(
            "/object?",
            json!({
                "info": {"page": 1, "next": "https://api.harvardartmuseums.org/object?page=2"},
                "records": [
                    {"title": "Cat", "medium": "Bronze", "contact": "x@harvard.edu"},
                    {"title": "Cat Nap"}
                ]
            }),
        )
}

/// Submit して応答まで反映する
async fn submit(model: &mut Model, api: &FakeApi) {
    let request = update(model, Msg::Submit).request.unwrap();
    let response = request.send(api).await;
    update(model, Msg::PageLoaded(response));
}

// ============================================================================
// key_to_msg
// ============================================================================

#[test]
fn tab_cycles_focus_from_any_pane() {
    for &focus in Focus::all() {
        let model = make_model(focus);
        assert!(matches!(model.key_to_msg(KeyCode::Tab), Some(Msg::NextFocus)));
        assert!(matches!(model.key_to_msg(KeyCode::BackTab), Some(Msg::PrevFocus)));
    }
}

#[test]
fn keyword_focus_types_characters() {
    let model = make_model(Focus::Keyword);
    assert!(matches!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Input('q'))));
    assert!(matches!(model.key_to_msg(KeyCode::Char('n')), Some(Msg::Input('n'))));
    assert!(matches!(model.key_to_msg(KeyCode::Enter), Some(Msg::Submit)));
}

#[test]
fn q_and_esc_quit_outside_keyword() {
    let model = make_model(Focus::Results);
    assert!(matches!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Quit)));
    assert!(matches!(model.key_to_msg(KeyCode::Esc), Some(Msg::Quit)));

    let model = make_model(Focus::Keyword);
    assert!(matches!(model.key_to_msg(KeyCode::Esc), Some(Msg::Quit)));
}

#[test]
fn n_and_p_navigate() {
    let model = make_model(Focus::Results);
    assert!(matches!(
        model.key_to_msg(KeyCode::Char('n')),
        Some(Msg::Navigate(NavDirection::Next))
    ));
    assert!(matches!(
        model.key_to_msg(KeyCode::Char('p')),
        Some(Msg::Navigate(NavDirection::Previous))
    ));
}

#[test]
fn enter_depends_on_focus() {
    assert!(matches!(
        make_model(Focus::Century).key_to_msg(KeyCode::Enter),
        Some(Msg::Submit)
    ));
    assert!(matches!(
        make_model(Focus::Results).key_to_msg(KeyCode::Enter),
        Some(Msg::Activate)
    ));
    assert!(matches!(
        make_model(Focus::Feature).key_to_msg(KeyCode::Enter),
        Some(Msg::Activate)
    ));
}

#[test]
fn arrows_cycle_options_only_in_form() {
    let model = make_model(Focus::Classification);
    assert!(matches!(model.key_to_msg(KeyCode::Right), Some(Msg::OptionNext)));
    assert!(matches!(model.key_to_msg(KeyCode::Left), Some(Msg::OptionPrev)));

    let model = make_model(Focus::Results);
    assert!(model.key_to_msg(KeyCode::Right).is_none());
}

// ============================================================================
// update
// ============================================================================

#[test]
fn focus_wraps_around() {
    let mut model = make_model(Focus::Feature);
    update(&mut model, Msg::NextFocus);
    assert_eq!(model.focus, Focus::Classification);
    update(&mut model, Msg::PrevFocus);
    assert_eq!(model.focus, Focus::Feature);
}

#[test]
fn option_cycle_includes_any() {
    let mut model = with_categories(make_model(Focus::Classification));
    assert_eq!(model.selected_option(CategoryKind::Classifications), "");

    update(&mut model, Msg::OptionNext);
    assert_eq!(model.selected_option(CategoryKind::Classifications), "Paintings");

    update(&mut model, Msg::OptionPrev);
    update(&mut model, Msg::OptionPrev);
    assert_eq!(model.selected_option(CategoryKind::Classifications), "Prints");
}

#[test]
fn option_cycle_without_categories_stays_on_any() {
    let mut model = make_model(Focus::Century);
    update(&mut model, Msg::OptionNext);
    assert_eq!(model.selected_option(CategoryKind::Centuries), "");
}

#[test]
fn filter_reflects_form_state() {
    let mut model = with_categories(make_model(Focus::Classification));
    update(&mut model, Msg::OptionNext);
    model.focus = Focus::Century;
    update(&mut model, Msg::OptionNext);
    update(&mut model, Msg::OptionNext);
    for c in "cat".chars() {
        update(&mut model, Msg::Input(c));
    }
    update(&mut model, Msg::Backspace);

    let filter = model.filter();
    assert_eq!(filter.classification, "Paintings");
    assert_eq!(filter.century, "19th century");
    assert_eq!(filter.keyword, "ca");
}

#[tokio::test]
async fn submit_renders_and_selects_first_card() {
    let api = object_api();
    let mut model = make_model(Focus::Keyword);

    submit(&mut model, &api).await;

    assert_eq!(model.gallery.page().unwrap().cards.len(), 2);
    assert_eq!(model.results.selected(), Some(0));
    assert!(!model.gallery.busy().is_busy());
    assert!(api.calls()[0].contains("classification=&century=&keyword="));
}

#[tokio::test]
async fn activate_card_then_follow_facet_link() {
    let api = object_api();
    let mut model = make_model(Focus::Keyword);
    submit(&mut model, &api).await;

    model.focus = Focus::Results;
    let effect = update(&mut model, Msg::Activate);
    assert!(effect.request.is_none());
    assert_eq!(model.focus, Focus::Feature);
    assert_eq!(
        model.gallery.feature().unwrap().title.as_deref(),
        Some("Cat")
    );

    // 先頭のリンクは Medium: Bronze
    let request = update(&mut model, Msg::Activate).request.unwrap();
    assert!(request.url().ends_with("medium=Bronze"));
    assert_eq!(model.focus, Focus::Results);

    let response = request.send(&api).await;
    update(&mut model, Msg::PageLoaded(response));
    assert_eq!(
        model.gallery.page().unwrap().cards[0].title.as_deref(),
        Some("Bell")
    );
}

#[tokio::test]
async fn mailto_link_only_sets_notice() {
    let api = object_api();
    let mut model = make_model(Focus::Keyword);
    submit(&mut model, &api).await;

    model.focus = Focus::Results;
    update(&mut model, Msg::Activate);
    update(&mut model, Msg::MoveDown);

    let effect = update(&mut model, Msg::Activate);
    assert!(effect.request.is_none());
    assert_eq!(model.notice.as_deref(), Some("mailto:x@harvard.edu"));
    assert_eq!(model.focus, Focus::Feature);
}

#[tokio::test]
async fn navigate_disabled_issues_nothing() {
    let api = object_api();
    let mut model = make_model(Focus::Keyword);
    submit(&mut model, &api).await;

    assert!(update(&mut model, Msg::Navigate(NavDirection::Previous))
        .request
        .is_none());
    assert!(update(&mut model, Msg::Navigate(NavDirection::Next))
        .request
        .is_some());
}

#[test]
fn move_cursor_without_page_is_noop() {
    let mut model = make_model(Focus::Results);
    update(&mut model, Msg::MoveDown);
    assert_eq!(model.results.selected(), None);
}

#[test]
fn quit_sets_flag() {
    let mut model = make_model(Focus::Results);
    update(&mut model, Msg::Quit);
    assert!(model.should_quit);
}
