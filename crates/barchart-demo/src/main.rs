// File: crates/barchart-demo/src/main.rs
// Summary: Demo drives the full MVC pipeline headlessly — data, animation, interaction, teardown.

use std::time::Duration;

use anyhow::Result;
use barchart_core::{
    ChartConfigPatch, ChartController, ChartEvent, EventKind, MemorySurface, PointerEvent,
    PointerKind, Size,
};
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let surface = MemorySurface::new(Size { width: 400.0, height: 300.0 });
    let patch: ChartConfigPatch = serde_json::from_value(json!({
        "animation": { "duration": 300, "easing": "cubicInOut" }
    }))?;
    let mut chart = ChartController::new(surface, Some(patch));

    chart.events().on(EventKind::SelectionChanged, |event| {
        if let ChartEvent::SelectionChanged { item, index, .. } = event {
            println!(
                "selection -> {:?} ({})",
                index,
                item.as_ref().map_or("none".to_string(), |i| i.name.clone())
            );
        }
    });
    chart.events().on(EventKind::Rendered, |_| println!("rendered"));

    chart.set_data(&json!([
        { "name": "Q1", "value": 12 },
        { "name": "Q2", "value": 30, "color": "#e67e22" },
        { "name": "Q3", "value": 7 },
        { "name": "Q4", "value": 21 }
    ]))?;

    println!(
        "{} bars, {} scene nodes",
        chart.view().bars().len(),
        chart.view().surface().node_count()
    );

    // Drive the entry animation at ~60fps until it settles.
    let mut frames = 0;
    while chart.view().is_animating() {
        chart.tick(Duration::from_millis(16));
        frames += 1;
    }
    println!("entry animation settled after {frames} frames");

    // Simulate hover + click on the second bar.
    let target = chart.view().bars()[1];
    chart.dispatch_pointer(&PointerEvent { kind: PointerKind::Over, target, x: 0.0, y: 0.0 })?;
    chart.dispatch_pointer(&PointerEvent { kind: PointerKind::Click, target, x: 0.0, y: 0.0 })?;

    // Narrow the chart and re-render.
    chart.update_options(&serde_json::from_value(json!({ "width": 320 }))?)?;
    chart.resize()?;

    chart.destroy();
    println!("destroyed: {}", chart.is_destroyed());
    Ok(())
}
