// File: crates/barchart-core/tests/lifecycle.rs
// Purpose: Init/destroy ordering, destroyed guards, animation teardown, resize.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use barchart_core::config::AnimationSectionPatch;
use barchart_core::{
    ChartConfigPatch, ChartController, ChartError, ChartEvent, EventKind, MemorySurface,
    RectShape, Size,
};
use serde_json::{json, Value};

fn surface() -> MemorySurface {
    MemorySurface::new(Size { width: 400.0, height: 300.0 })
}

fn bar_rect(chart: &ChartController<MemorySurface>, index: usize) -> RectShape {
    let node = chart.view().bars()[index];
    chart.view().surface().rect_shape(node).unwrap()
}

#[test]
fn entry_animation_runs_only_on_first_render() {
    let mut chart = ChartController::new(surface(), None);
    chart.set_data(&json!([{ "name": "A", "value": 20 }])).unwrap();

    // First render: bar starts at the baseline with zero height.
    assert_eq!(bar_rect(&chart, 0).height, 0.0);
    assert!(chart.view().is_animating());

    // Halfway through the default 1s duration the height is in flight.
    chart.tick(Duration::from_millis(500));
    let mid = bar_rect(&chart, 0).height;
    assert!(mid > 0.0);

    chart.tick(Duration::from_millis(600));
    let done = bar_rect(&chart, 0).height;
    assert!(done > mid);
    assert!(!chart.view().is_animating());

    // Subsequent renders apply the final height immediately.
    chart.render().unwrap();
    assert_eq!(bar_rect(&chart, 0).height, done);
    assert!(!chart.view().is_animating());
}

#[test]
fn clear_cancels_in_flight_animation() {
    let mut chart = ChartController::new(surface(), None);
    chart.set_data(&json!([{ "name": "A", "value": 20 }])).unwrap();
    assert!(chart.view().is_animating());

    chart.clear().unwrap();
    assert!(!chart.view().is_animating());
    assert!(chart.view().bars().is_empty());
    // A late frame tick must not touch disposed shapes.
    chart.tick(Duration::from_millis(100));
}

#[test]
fn destroy_cancels_animation_and_disposes() {
    let mut chart = ChartController::new(surface(), None);
    chart.set_data(&json!([{ "name": "A", "value": 20 }])).unwrap();
    assert!(chart.view().is_animating());

    chart.destroy();
    assert!(!chart.view().is_animating());
    assert!(chart.view().surface().is_disposed());
    chart.tick(Duration::from_millis(100));
}

#[test]
fn destroyed_guard_rejects_mutations() {
    let mut chart = ChartController::new(surface(), None);
    chart.set_data(&json!([{ "value": 1 }])).unwrap();
    chart.destroy();

    assert!(matches!(
        chart.set_data(&json!([])),
        Err(ChartError::Destroyed(_))
    ));
    assert!(matches!(chart.render(), Err(ChartError::Destroyed(_))));
    assert!(matches!(
        chart.update_options(&Default::default()),
        Err(ChartError::Destroyed(_))
    ));
    assert!(matches!(chart.resize(), Err(ChartError::Destroyed(_))));
    assert!(matches!(chart.clear(), Err(ChartError::Destroyed(_))));
}

#[test]
fn destroy_is_idempotent_and_emits_once() {
    let mut chart = ChartController::new(surface(), None);
    let destroyed = Rc::new(Cell::new(0));
    {
        let destroyed = Rc::clone(&destroyed);
        chart
            .events()
            .on(EventKind::Destroyed, move |_| destroyed.set(destroyed.get() + 1));
    }

    chart.destroy();
    chart.destroy();
    assert_eq!(destroyed.get(), 1);
    assert!(chart.is_destroyed());
    assert!(!chart.is_initialized());
}

#[test]
fn lifecycle_reports_initialized_after_construction() {
    let chart = ChartController::new(surface(), None);
    assert!(chart.is_initialized());
    assert!(!chart.is_destroyed());
}

#[test]
fn resize_rerenders_without_animation() {
    let mut chart = ChartController::new(surface(), None);
    chart.set_data(&json!([{ "name": "A", "value": 20 }])).unwrap();
    chart.tick(Duration::from_millis(1100));
    let settled = bar_rect(&chart, 0);

    let resized = Rc::new(Cell::new(0));
    {
        let resized = Rc::clone(&resized);
        chart
            .events()
            .on(EventKind::Resized, move |_| resized.set(resized.get() + 1));
    }

    chart.resize().unwrap();
    assert_eq!(resized.get(), 1);
    // Geometry lands at its final value immediately; no entry animation.
    assert_eq!(bar_rect(&chart, 0), settled);
    assert!(!chart.view().is_animating());
}

#[test]
fn clear_empties_but_keeps_the_chart_usable() {
    let mut chart = ChartController::new(surface(), None);
    chart.set_data(&json!([{ "value": 1 }, { "value": 2 }])).unwrap();

    let cleared = Rc::new(Cell::new(0));
    {
        let cleared = Rc::clone(&cleared);
        chart
            .events()
            .on(EventKind::Cleared, move |_| cleared.set(cleared.get() + 1));
    }

    chart.clear().unwrap();
    assert_eq!(cleared.get(), 1);
    assert!(chart.get_data().is_empty());

    // Still alive: new data renders again.
    chart.set_data(&json!([{ "value": 3 }])).unwrap();
    assert_eq!(chart.view().bars().len(), 1);
}

#[test]
fn set_data_failure_emits_error_event_with_rejected_input() {
    let mut chart = ChartController::new(surface(), None);
    let seen: Rc<RefCell<Vec<(String, Option<Value>)>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        chart.events().on(EventKind::Error, move |event| {
            if let ChartEvent::Error { op, data, .. } = event {
                seen.borrow_mut().push((op.to_string(), data.clone()));
            }
        });
    }

    assert!(chart.set_data(&json!(42)).is_err());
    assert_eq!(seen.borrow().len(), 1);
    // The event names the failed operation and carries the rejected payload.
    assert_eq!(seen.borrow()[0].0, "setData");
    assert_eq!(seen.borrow()[0].1, Some(json!(42)));
    assert!(chart.get_data().is_empty());
}

#[test]
fn non_finite_animation_duration_renders_without_panicking() {
    let mut chart = ChartController::new(surface(), None);
    let patch = ChartConfigPatch {
        animation: Some(AnimationSectionPatch { duration: Some(f64::NAN), easing: None }),
        ..ChartConfigPatch::default()
    };
    chart.update_options(&patch).unwrap();
    chart.set_data(&json!([{ "name": "A", "value": 20 }])).unwrap();

    // The entry collapses to an immediate settle on the first frame.
    chart.tick(Duration::from_millis(16));
    assert!(!chart.view().is_animating());
    assert_eq!(bar_rect(&chart, 0).height, 240.0);
}
