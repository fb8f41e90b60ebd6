// File: crates/barchart-core/src/scale.rs
// Summary: Banded categorical X scale and linear Y scale with nice rounding and ticks.

use crate::config::ChartConfig;
use crate::data::DataItem;

/// Fraction of each band slot given over to inter-band padding.
pub const BAND_PADDING: f64 = 0.1;

/// Discrete positional scale partitioning a pixel range into equal-width
/// slots, one per category, with symmetric inner/outer padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let span = range.1 - range.0;
        let step = span / (n - padding + 2.0 * padding).max(1.0);
        let start = range.0 + (span - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);
        Self { domain, start, step, bandwidth }
    }

    /// Left edge of the band for `key`, or `None` for keys outside the
    /// domain. Duplicate keys collide to one band; the last occurrence wins.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .rposition(|d| d == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Continuous value scale mapping a numeric domain onto a pixel range. The
/// range may be inverted (larger values mapping to smaller pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain maps every value onto the first range endpoint,
    /// which keeps the zero-baseline stable when there is no data.
    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Round the domain bounds outward to human-friendly numbers (1/2/5
    /// multiples of a power of ten), sized for roughly ten ticks.
    pub fn nice(mut self) -> Self {
        let (mut lo, mut hi) = ordered(self.domain);
        if lo == hi {
            return self;
        }
        // Two passes, matching the d3 algorithm: the first rounding can
        // change which step applies.
        for _ in 0..2 {
            let step = tick_increment(lo, hi, 10);
            if step <= 0.0 || !step.is_finite() {
                break;
            }
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        }
        self.domain = if self.domain.0 <= self.domain.1 { (lo, hi) } else { (hi, lo) };
        self
    }

    /// Roughly `count` evenly spaced nice values covering the domain.
    /// Always non-empty and NaN-free, even for a degenerate domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        if lo == hi {
            return vec![lo];
        }
        let step = tick_increment(lo, hi, count.max(1));
        if step <= 0.0 || !step.is_finite() {
            return vec![lo];
        }
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        let mut values: Vec<f64> = (first..=last).map(|i| i as f64 * step).collect();
        if values.is_empty() {
            values.push(lo);
        }
        if self.domain.0 > self.domain.1 {
            values.reverse();
        }
        values
    }
}

fn ordered(domain: (f64, f64)) -> (f64, f64) {
    if domain.0 <= domain.1 {
        domain
    } else {
        (domain.1, domain.0)
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Positional scale over the ordered item names, spanning the plot width.
pub fn x_scale_for(data: &[DataItem], config: &ChartConfig) -> BandScale {
    BandScale::new(
        data.iter().map(|d| d.name.clone()).collect(),
        (config.padding.left, config.width - config.padding.right),
        BAND_PADDING,
    )
}

/// Value scale from zero to the data maximum, mapped onto the plot height
/// top-down (larger values land closer to the top padding), nice-rounded.
pub fn y_scale_for(data: &[DataItem], config: &ChartConfig) -> LinearScale {
    let max_value = data
        .iter()
        .map(|d| d.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_value = if max_value.is_finite() { max_value } else { 0.0 };
    LinearScale::new(
        (0.0, max_value),
        (config.height - config.padding.bottom, config.padding.top),
    )
    .nice()
}
