// File: crates/barchart-core/src/data.rs
// Summary: Data item and layout result types shared by model, layout, and view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable identifier carried through from raw input; defaults to the item's
/// position when the caller did not provide one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Text(String),
    Index(u64),
}

/// One validated chart datum. `name` is the category key; it should be unique
/// across items for scale correctness but duplicates are tolerated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub name: String,
    pub value: f64,
    pub id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Extension fields carried through verbatim from the raw input.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Pixel-space rectangle for a single bar, paired with its source datum.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub data: DataItem,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub label: String,
    pub position: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTicks {
    pub ticks: Vec<AxisTick>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLayout {
    pub x_axis: AxisTicks,
    pub y_axis: AxisTicks,
}

/// Ephemeral geometry, recomputed on every render pass and never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    pub bars: Vec<BarRect>,
    pub axes: AxisLayout,
}
