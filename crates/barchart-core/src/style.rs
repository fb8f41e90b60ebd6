// File: crates/barchart-core/src/style.rs
// Summary: Pure lookups from data + configuration + interaction flags to shape styles.

use crate::config::ChartConfig;
use crate::data::DataItem;
use crate::renderer::{Cursor, ShapeStyle, TextAlign};

/// Base bar style from configuration alone.
pub fn base_bar_style(config: &ChartConfig) -> ShapeStyle {
    ShapeStyle {
        fill: Some(config.bar.fill.clone()),
        stroke: Some(config.bar.stroke.clone()),
        line_width: config.bar.stroke_width,
        corner_radius: config.bar.corner_radius,
        opacity: config.bar.opacity,
        cursor: Cursor::Pointer,
        ..ShapeStyle::default()
    }
}

/// Base style with the hover section layered on top.
pub fn hover_bar_style(config: &ChartConfig) -> ShapeStyle {
    ShapeStyle {
        fill: Some(config.hover.fill.clone()),
        opacity: config.hover.opacity,
        ..base_bar_style(config)
    }
}

/// Base style with the selected section layered on top.
pub fn selected_bar_style(config: &ChartConfig) -> ShapeStyle {
    ShapeStyle {
        fill: Some(config.selected.fill.clone()),
        stroke: Some(config.selected.stroke.clone()),
        line_width: config.selected.stroke_width,
        ..base_bar_style(config)
    }
}

/// Resolve the style for one bar. Selection wins over hover; the base style
/// honors a per-item color override.
pub fn bar_style(
    item: &DataItem,
    config: &ChartConfig,
    hovered: bool,
    selected: bool,
) -> ShapeStyle {
    if selected {
        return selected_bar_style(config);
    }
    if hovered {
        return hover_bar_style(config);
    }
    let mut style = base_bar_style(config);
    if let Some(color) = &item.color {
        style.fill = Some(color.clone());
    }
    style
}

/// Stroke style shared by axis spines and tick marks.
pub fn axis_style() -> ShapeStyle {
    ShapeStyle {
        stroke: Some("#333".into()),
        line_width: 1.0,
        ..ShapeStyle::default()
    }
}

/// Style for tick labels; alignment is adjusted per axis by the view.
pub fn axis_label_style() -> ShapeStyle {
    ShapeStyle {
        fill: Some("#666".into()),
        font_size: 12.0,
        align: TextAlign::Center,
        ..ShapeStyle::default()
    }
}
