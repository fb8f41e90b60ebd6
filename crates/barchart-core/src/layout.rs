// File: crates/barchart-core/src/layout.rs
// Summary: Pure transformer from data + configuration to bar rectangles and axis ticks.

use crate::config::ChartConfig;
use crate::data::{AxisLayout, AxisTick, AxisTicks, BarRect, DataItem, LayoutResult};
use crate::scale::{x_scale_for, y_scale_for, BandScale, LinearScale};

const Y_TICK_COUNT: usize = 5;

/// Stateless between calls apart from the last-computed scales, which are
/// overwritten on every [`ChartLayout::calculate`].
pub struct ChartLayout {
    x_scale: BandScale,
    y_scale: LinearScale,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartLayout {
    pub fn new() -> Self {
        Self {
            x_scale: BandScale::new(Vec::new(), (0.0, 1.0), crate::scale::BAND_PADDING),
            y_scale: LinearScale::new((0.0, 0.0), (0.0, 1.0)),
        }
    }

    /// Compute per-bar rectangles and axis tick positions. Pure in its
    /// inputs: identical `(data, config)` yields identical geometry.
    pub fn calculate(&mut self, data: &[DataItem], config: &ChartConfig) -> LayoutResult {
        self.x_scale = x_scale_for(data, config);
        self.y_scale = y_scale_for(data, config);

        LayoutResult {
            bars: self.calculate_bars(data),
            axes: self.calculate_axes(data),
        }
    }

    fn calculate_bars(&self, data: &[DataItem]) -> Vec<BarRect> {
        let baseline = self.y_scale.scale(0.0);
        data.iter()
            .map(|item| {
                let y = self.y_scale.scale(item.value);
                BarRect {
                    x: self.x_scale.position(&item.name).unwrap_or(0.0),
                    y,
                    width: self.x_scale.bandwidth(),
                    // Values below the zero baseline clamp to a zero-height
                    // bar sitting on the baseline; below-baseline bars are
                    // out of scope for this single-origin layout.
                    height: (baseline - y).max(0.0),
                    data: item.clone(),
                }
            })
            .collect()
    }

    fn calculate_axes(&self, data: &[DataItem]) -> AxisLayout {
        let x_ticks = data
            .iter()
            .map(|item| AxisTick {
                label: item.name.clone(),
                position: self.x_scale.position(&item.name).unwrap_or(0.0),
            })
            .collect();

        let y_ticks = self
            .y_scale
            .ticks(Y_TICK_COUNT)
            .into_iter()
            .map(|value| AxisTick {
                label: format_tick(value),
                position: self.y_scale.scale(value),
            })
            .collect();

        AxisLayout {
            x_axis: AxisTicks { ticks: x_ticks },
            y_axis: AxisTicks { ticks: y_ticks },
        }
    }

    pub fn x_scale(&self) -> &BandScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }
}

fn format_tick(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
