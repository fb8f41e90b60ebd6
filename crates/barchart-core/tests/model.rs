// File: crates/barchart-core/tests/model.rs
// Purpose: Data validation/coercion, option merging, and interaction state transitions.

use std::cell::Cell;
use std::rc::Rc;

use barchart_core::{ChartConfigPatch, ChartError, ChartModel, EventKind, ItemId};
use serde_json::json;

fn counter(model: &ChartModel, kind: EventKind) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    model.events().on(kind, move |_| inner.set(inner.get() + 1));
    count
}

#[test]
fn set_data_coerces_missing_fields() {
    let mut model = ChartModel::new(None);
    model
        .set_data(&json!([
            {},
            { "name": "B", "value": "7.5", "color": "#123456" },
            { "value": 3, "id": "row-3", "weight": 9 },
            { "name": "", "value": "not a number" },
            { "name": true, "value": true }
        ]))
        .unwrap();

    let data = model.data();
    assert_eq!(data.len(), 5);

    assert_eq!(data[0].name, "Item 0");
    assert_eq!(data[0].value, 0.0);
    assert_eq!(data[0].id, ItemId::Index(0));

    assert_eq!(data[1].name, "B");
    assert_eq!(data[1].value, 7.5);
    assert_eq!(data[1].color.as_deref(), Some("#123456"));

    assert_eq!(data[2].name, "Item 2");
    assert_eq!(data[2].id, ItemId::Text("row-3".into()));
    assert_eq!(data[2].extra.get("weight"), Some(&json!(9)));

    // Empty name is falsy; non-numeric value coerces to zero.
    assert_eq!(data[3].name, "Item 3");
    assert_eq!(data[3].value, 0.0);

    // Booleans are neither stringified nor numified.
    assert_eq!(data[4].name, "Item 4");
    assert_eq!(data[4].value, 0.0);
}

#[test]
fn set_data_rejects_whole_batch() {
    let mut model = ChartModel::new(None);
    model.set_data(&json!([{ "name": "keep", "value": 1 }])).unwrap();

    assert!(matches!(
        model.set_data(&json!("not an array")),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        model.set_data(&json!([{ "name": "ok" }, 42])),
        Err(ChartError::InvalidData(_))
    ));

    // Prior state untouched after both failures.
    assert_eq!(model.data().len(), 1);
    assert_eq!(model.data()[0].name, "keep");
}

#[test]
fn set_data_resets_selection_and_hover() {
    let mut model = ChartModel::new(None);
    model.set_data(&json!([{ "value": 1 }, { "value": 2 }])).unwrap();
    model.set_selected(Some(1)).unwrap();
    model.set_hovered(Some(0)).unwrap();

    model.set_data(&json!([{ "value": 3 }])).unwrap();
    assert_eq!(model.selected().1, None);
    assert_eq!(model.hovered().1, None);
}

#[test]
fn selection_change_detection() {
    let mut model = ChartModel::new(None);
    model.set_data(&json!([{ "value": 1 }, { "value": 2 }])).unwrap();
    let count = counter(&model, EventKind::SelectionChanged);

    let change = model.set_selected(Some(1)).unwrap().expect("first set emits");
    assert_eq!(change.index, Some(1));
    assert_eq!(change.prev_index, None);
    assert_eq!(change.item.as_ref().map(|i| i.value), Some(2.0));
    assert_eq!(count.get(), 1);

    // Setting the current value is observably a no-op.
    assert!(model.set_selected(Some(1)).unwrap().is_none());
    assert_eq!(count.get(), 1);

    let change = model.set_selected(None).unwrap().expect("clearing emits");
    assert_eq!(change.prev_index, Some(1));
    assert_eq!(count.get(), 2);
}

#[test]
fn out_of_range_index_resolves_to_no_item() {
    let mut model = ChartModel::new(None);
    model.set_data(&json!([{ "value": 1 }])).unwrap();

    let change = model.set_selected(Some(99)).unwrap().unwrap();
    assert_eq!(change.index, Some(99));
    assert!(change.item.is_none());
    assert_eq!(model.selected(), (None, Some(99)));
}

#[test]
fn hover_is_independent_of_selection() {
    let mut model = ChartModel::new(None);
    model.set_data(&json!([{ "value": 1 }, { "value": 2 }])).unwrap();

    model.set_selected(Some(0)).unwrap();
    model.set_hovered(Some(1)).unwrap();
    assert_eq!(model.selected().1, Some(0));
    assert_eq!(model.hovered().1, Some(1));

    model.set_hovered(None).unwrap();
    assert_eq!(model.selected().1, Some(0));
}

#[test]
fn options_merge_is_shallow_per_section() {
    let mut model = ChartModel::new(None);
    let defaults = model.options().clone();

    let patch: ChartConfigPatch =
        serde_json::from_value(json!({ "bar": { "fill": "#fff" } })).unwrap();
    model.set_options(&patch).unwrap();

    let options = model.options();
    assert_eq!(options.bar.fill, "#fff");
    // Sibling fields of the patched section survive.
    assert_eq!(options.bar.opacity, defaults.bar.opacity);
    assert_eq!(options.bar.stroke, defaults.bar.stroke);
    // Untouched sections survive.
    assert_eq!(options.hover, defaults.hover);
    assert_eq!(options.width, defaults.width);
}

#[test]
fn constructor_patch_seeds_total_config() {
    let patch: ChartConfigPatch =
        serde_json::from_value(json!({ "width": 800, "animation": { "duration": 0 } })).unwrap();
    let model = ChartModel::new(Some(&patch));
    assert_eq!(model.options().width, 800.0);
    assert_eq!(model.options().animation.duration, 0.0);
    assert_eq!(model.options().animation.easing, "cubicOut");
    assert_eq!(model.options().height, 300.0);
}

#[test]
fn clear_and_destroy() {
    let mut model = ChartModel::new(None);
    model.set_data(&json!([{ "value": 1 }])).unwrap();
    model.set_selected(Some(0)).unwrap();
    let cleared = counter(&model, EventKind::Cleared);

    model.clear().unwrap();
    assert!(model.data().is_empty());
    assert_eq!(model.selected().1, None);
    assert_eq!(cleared.get(), 1);

    model.destroy();
    assert!(model.is_destroyed());
    assert!(matches!(model.clear(), Err(ChartError::Destroyed(_))));
    assert!(matches!(
        model.set_data(&json!([])),
        Err(ChartError::Destroyed(_))
    ));
    // Second destroy is a safe no-op.
    model.destroy();
}
