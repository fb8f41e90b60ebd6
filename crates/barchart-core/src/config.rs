// File: crates/barchart-core/src/config.rs
// Summary: Chart configuration sections, defaults, and shallow-per-section patch merge.

use serde::{Deserialize, Serialize};

/// Fully-populated chart configuration. Downstream consumers (layout, view,
/// style resolution) always see a total record; partial updates are merged
/// over the previous complete configuration via [`ChartConfig::apply`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub bar: BarSection,
    pub hover: HoverSection,
    pub selected: SelectedSection,
    pub x_axis: AxisSection,
    pub y_axis: AxisSection,
    pub animation: AnimationSection,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSection {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub corner_radius: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoverSection {
    pub fill: String,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSection {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSection {
    pub show: bool,
    pub tick_size: f64,
    pub tick_padding: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationSection {
    /// Entry animation duration in milliseconds.
    pub duration: f64,
    /// Easing name; unrecognized names fall back to `cubicOut`.
    pub easing: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            padding: Padding { top: 20.0, right: 20.0, bottom: 40.0, left: 60.0 },
            bar: BarSection {
                fill: "#5470c6".into(),
                stroke: "none".into(),
                stroke_width: 0.0,
                corner_radius: 0.0,
                opacity: 1.0,
            },
            hover: HoverSection { fill: "#91cc75".into(), opacity: 0.8 },
            selected: SelectedSection {
                fill: "#fac858".into(),
                stroke: "#ee6666".into(),
                stroke_width: 2.0,
            },
            x_axis: AxisSection { show: true, tick_size: 6.0, tick_padding: 3.0 },
            y_axis: AxisSection { show: true, tick_size: 6.0, tick_padding: 3.0 },
            animation: AnimationSection { duration: 1000.0, easing: "cubicOut".into() },
        }
    }
}

/// Partial configuration update. Every section and every field within a
/// section is optional; merging is shallow-per-section, so patching one field
/// of `bar` leaves its sibling fields untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfigPatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub padding: Option<PaddingPatch>,
    pub bar: Option<BarSectionPatch>,
    pub hover: Option<HoverSectionPatch>,
    pub selected: Option<SelectedSectionPatch>,
    pub x_axis: Option<AxisSectionPatch>,
    pub y_axis: Option<AxisSectionPatch>,
    pub animation: Option<AnimationSectionPatch>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingPatch {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarSectionPatch {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub corner_radius: Option<f64>,
    pub opacity: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverSectionPatch {
    pub fill: Option<String>,
    pub opacity: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectedSectionPatch {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisSectionPatch {
    pub show: Option<bool>,
    pub tick_size: Option<f64>,
    pub tick_padding: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSectionPatch {
    pub duration: Option<f64>,
    pub easing: Option<String>,
}

impl ChartConfig {
    /// Merge a partial update over this configuration. Sections present in
    /// the patch are merged field-wise; absent sections are left as-is, so
    /// the result stays total.
    pub fn apply(&mut self, patch: &ChartConfigPatch) {
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(p) = &patch.padding {
            merge(&mut self.padding.top, p.top);
            merge(&mut self.padding.right, p.right);
            merge(&mut self.padding.bottom, p.bottom);
            merge(&mut self.padding.left, p.left);
        }
        if let Some(p) = &patch.bar {
            merge_clone(&mut self.bar.fill, &p.fill);
            merge_clone(&mut self.bar.stroke, &p.stroke);
            merge(&mut self.bar.stroke_width, p.stroke_width);
            merge(&mut self.bar.corner_radius, p.corner_radius);
            merge(&mut self.bar.opacity, p.opacity);
        }
        if let Some(p) = &patch.hover {
            merge_clone(&mut self.hover.fill, &p.fill);
            merge(&mut self.hover.opacity, p.opacity);
        }
        if let Some(p) = &patch.selected {
            merge_clone(&mut self.selected.fill, &p.fill);
            merge_clone(&mut self.selected.stroke, &p.stroke);
            merge(&mut self.selected.stroke_width, p.stroke_width);
        }
        if let Some(p) = &patch.x_axis {
            apply_axis(&mut self.x_axis, p);
        }
        if let Some(p) = &patch.y_axis {
            apply_axis(&mut self.y_axis, p);
        }
        if let Some(p) = &patch.animation {
            merge(&mut self.animation.duration, p.duration);
            merge_clone(&mut self.animation.easing, &p.easing);
        }
    }

    /// Seed a total configuration from the default plus an optional patch.
    pub fn from_patch(patch: Option<&ChartConfigPatch>) -> Self {
        let mut config = Self::default();
        if let Some(patch) = patch {
            config.apply(patch);
        }
        config
    }
}

fn apply_axis(section: &mut AxisSection, patch: &AxisSectionPatch) {
    merge(&mut section.show, patch.show);
    merge(&mut section.tick_size, patch.tick_size);
    merge(&mut section.tick_padding, patch.tick_padding);
}

fn merge<T: Copy>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn merge_clone(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}
