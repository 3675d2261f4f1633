//! Whole-panel flows: UI events and key presses through bus, store,
//! pipeline, renderer and control sync.

use std::rc::Rc;

use filter_panel::testing::key;
use filter_panel::{ConfigError, KeyOutcome, Keymap, Markup, UiEvent};
use sofa_panel::markup::default_markup;
use sofa_panel::{FilterField, FilterPanel, FilterState, PartialFilterUpdate, Record};

fn records() -> Rc<[Record]> {
    vec![
        Record::new("A", "Modern", "Leather", "Red", "IT"),
        Record::new("B", "Modern", "Fabric", "Blue", "SE"),
    ]
    .into()
}

fn catalogue() -> Rc<[Record]> {
    vec![
        Record::new("Oxford", "Chesterfield", "Leather", "Brown", "England"),
        Record::new("Milano", "Modern", "Leather", "Black", "Italy"),
        Record::new("Windsor", "Chesterfield", "Velvet", "Blue", "England"),
        Record::new("Camden", "Chesterfield", "Leather", "Green", "England"),
    ]
    .into()
}

fn panel(dataset: Rc<[Record]>) -> FilterPanel {
    let markup = default_markup(&dataset);
    FilterPanel::build(dataset, &markup, Keymap::default()).unwrap()
}

fn names(panel: &FilterPanel) -> Vec<String> {
    panel
        .displayed()
        .iter()
        .map(|item| {
            item.trim_start_matches("Name: ")
                .split(',')
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

#[test]
fn test_style_then_color_narrows_to_single_record() {
    let mut panel = panel(records());
    assert_eq!(names(&panel), vec!["A", "B"]);

    assert_eq!(panel.handle_ui_event(&UiEvent::change("select-style", "Modern")), Some(true));
    assert_eq!(names(&panel), vec!["A", "B"]);

    assert_eq!(panel.handle_ui_event(&UiEvent::change("select-color", "Red")), Some(true));
    assert_eq!(names(&panel), vec!["A"]);
    assert_eq!(
        panel.displayed(),
        vec!["Name: A, style: Modern, material: Leather, color: Red, origin: IT."]
    );
}

#[test]
fn test_reset_all_restores_full_dataset() {
    let mut panel = panel(catalogue());
    panel.apply_update(
        PartialFilterUpdate::field(FilterField::Style, "Chesterfield").with(FilterField::Material, "Leather"),
    );
    assert_eq!(names(&panel), vec!["Oxford", "Camden"]);

    panel.handle_ui_event(&UiEvent::click("btn-reset-all"));

    assert_eq!(panel.state(), &FilterState::default());
    assert_eq!(names(&panel), vec!["Oxford", "Milano", "Windsor", "Camden"]);
    let document = panel.document();
    for id in ["select-style", "select-material", "select-color", "select-origin"] {
        assert_eq!(document.select(id).unwrap().value(), "", "{id}");
    }
}

#[test]
fn test_field_reset_clears_its_select() {
    let mut panel = panel(catalogue());
    panel.handle_ui_event(&UiEvent::change("select-style", "Chesterfield"));
    panel.handle_ui_event(&UiEvent::change("select-color", "Blue"));
    assert_eq!(names(&panel), vec!["Windsor"]);

    panel.handle_ui_event(&UiEvent::click("btn-reset-color"));

    assert_eq!(panel.state().color, "");
    assert_eq!(panel.state().style, "Chesterfield");
    assert_eq!(panel.document().select("select-color").unwrap().value(), "");
    assert_eq!(panel.document().select("select-style").unwrap().value(), "Chesterfield");
    assert_eq!(names(&panel), vec!["Oxford", "Windsor", "Camden"]);
}

#[test]
fn test_programmatic_update_moves_selects() {
    let mut panel = panel(catalogue());
    panel.apply_update(PartialFilterUpdate::field(FilterField::Origin, "Italy"));

    assert_eq!(panel.document().select("select-origin").unwrap().value(), "Italy");
    assert_eq!(names(&panel), vec!["Milano"]);
}

#[test]
fn test_unchanged_value_still_rerenders() {
    let mut panel = panel(records());
    panel.handle_ui_event(&UiEvent::change("select-style", "Modern"));

    // Same value again: published, state unchanged, list identical
    assert_eq!(panel.handle_ui_event(&UiEvent::change("select-style", "Modern")), Some(false));
    assert_eq!(names(&panel), vec!["A", "B"]);
}

#[test]
fn test_no_match_shows_empty_list() {
    let mut panel = panel(records());
    panel.handle_ui_event(&UiEvent::change("select-material", "Fabric"));
    panel.handle_ui_event(&UiEvent::change("select-color", "Red"));
    assert!(panel.displayed().is_empty());
}

#[test]
fn test_keyboard_flow() {
    let mut panel = panel(records());

    // Focus starts on select-style; step to its first real option
    assert_eq!(panel.handle_key(key("right")), KeyOutcome::Dispatched { changed: true });
    assert_eq!(panel.state().style, "Modern");

    // select-material -> Fabric (second option)
    assert_eq!(panel.handle_key(key("tab")), KeyOutcome::Redraw);
    panel.handle_key(key("right"));
    panel.handle_key(key("right"));
    assert_eq!(panel.state().material, "Fabric");
    assert_eq!(names(&panel), vec!["B"]);

    // Walk to btn-reset-all: color, origin, four resets, reset-all
    for _ in 0..7 {
        panel.handle_key(key("tab"));
    }
    assert!(panel.document().is_focused("btn-reset-all"));
    assert_eq!(panel.handle_key(key("enter")), KeyOutcome::Dispatched { changed: true });
    assert_eq!(panel.state(), &FilterState::default());
    assert_eq!(names(&panel), vec!["A", "B"]);

    assert_eq!(panel.handle_key(key("q")), KeyOutcome::Quit);
}

#[test]
fn test_missing_control_is_config_error() {
    let dataset = records();
    let markup = Markup::new()
        .select("select-style", "Style", Vec::new())
        .select("select-material", "Material", Vec::new())
        .select("select-color", "Color", Vec::new())
        .select("select-origin", "Origin", Vec::new())
        .button("btn-reset-style", "Reset")
        .button("btn-reset-material", "Reset")
        .button("btn-reset-color", "Reset")
        .button("btn-reset-origin", "Reset")
        .list("list", "Sofas");

    let err = FilterPanel::build(dataset, &markup, Keymap::default()).err();
    assert_eq!(
        err,
        Some(ConfigError::MissingElement {
            id: "btn-reset-all".into()
        })
    );
}

#[test]
fn test_custom_layout_from_json() {
    let markup = Markup::from_json(
        r#"{
            "elements": [
                { "kind": "list", "id": "list", "title": "Results" },
                { "kind": "select", "id": "select-style", "label": "Style", "options": ["Modern"] },
                { "kind": "select", "id": "select-material", "label": "Material", "options": ["Leather", "Fabric"] },
                { "kind": "select", "id": "select-color", "label": "Color", "options": ["Red", "Blue"] },
                { "kind": "select", "id": "select-origin", "label": "Origin", "options": ["IT", "SE"] },
                { "kind": "button", "id": "btn-reset-style", "label": "x" },
                { "kind": "button", "id": "btn-reset-material", "label": "x" },
                { "kind": "button", "id": "btn-reset-color", "label": "x" },
                { "kind": "button", "id": "btn-reset-origin", "label": "x" },
                { "kind": "button", "id": "btn-reset-all", "label": "Clear" }
            ]
        }"#,
    )
    .unwrap();

    let mut panel = FilterPanel::build(records(), &markup, Keymap::default()).unwrap();
    panel.handle_ui_event(&UiEvent::change("select-origin", "SE"));
    assert_eq!(names(&panel), vec!["B"]);
}
