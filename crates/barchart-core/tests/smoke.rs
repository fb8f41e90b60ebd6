// File: crates/barchart-core/tests/smoke.rs
// Purpose: End-to-end pass over the headless surface — data in, scene graph out.

use std::time::Duration;

use barchart_core::{
    ChartConfigPatch, ChartController, MemorySurface, PointerEvent, PointerKind, ScenePayload,
    Size,
};
use serde_json::json;

#[test]
fn full_pipeline_smoke() {
    let surface = MemorySurface::new(Size { width: 400.0, height: 300.0 });
    let patch: ChartConfigPatch =
        serde_json::from_value(json!({ "animation": { "duration": 100 } })).unwrap();
    let mut chart = ChartController::new(surface, Some(patch));

    chart
        .set_data(&json!([
            { "name": "Q1", "value": 12 },
            { "name": "Q2", "value": 30 },
            { "name": "Q3", "value": 7 }
        ]))
        .unwrap();

    // One rect per item under the bar group, in data order.
    let bar_group = chart.view().bar_group();
    assert_eq!(chart.view().surface().children(bar_group).len(), 3);
    assert_eq!(chart.view().bars().len(), 3);
    for &node in chart.view().bars() {
        assert!(matches!(
            chart.view().surface().payload(node),
            Some(ScenePayload::Rect(_))
        ));
    }

    // Axis group holds both spines plus tick marks and labels.
    let axis_group = chart.view().axis_group();
    let axis_children = chart.view().surface().children(axis_group).to_vec();
    assert!(axis_children.len() > 2);
    let lines = axis_children
        .iter()
        .filter(|&&n| matches!(chart.view().surface().payload(n), Some(ScenePayload::Line(_))))
        .count();
    let texts = axis_children
        .iter()
        .filter(|&&n| matches!(chart.view().surface().payload(n), Some(ScenePayload::Text(_))))
        .count();
    assert!(lines >= 2 + 3, "two spines plus one mark per x tick");
    assert!(texts >= 3, "one label per x tick");

    // Run the entry animation to completion.
    for _ in 0..8 {
        chart.tick(Duration::from_millis(16));
    }
    assert!(!chart.view().is_animating());

    // Interact, then tear down.
    let target = chart.view().bars()[1];
    chart
        .dispatch_pointer(&PointerEvent { kind: PointerKind::Click, target, x: 0.0, y: 0.0 })
        .unwrap();
    assert_eq!(chart.selected().1, Some(1));

    chart.destroy();
    assert!(chart.view().surface().is_disposed());
}

#[test]
fn hidden_axes_render_no_axis_primitives() {
    let surface = MemorySurface::new(Size { width: 400.0, height: 300.0 });
    let patch: ChartConfigPatch = serde_json::from_value(json!({
        "xAxis": { "show": false },
        "yAxis": { "show": false }
    }))
    .unwrap();
    let mut chart = ChartController::new(surface, Some(patch));
    chart.set_data(&json!([{ "name": "A", "value": 1 }])).unwrap();

    let axis_group = chart.view().axis_group();
    assert!(chart.view().surface().children(axis_group).is_empty());
    assert_eq!(chart.view().bars().len(), 1);
}
