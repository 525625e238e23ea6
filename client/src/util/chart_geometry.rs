//! SVG geometry for the overview charts.
//!
//! Charts render as plain SVG; these helpers map data to coordinates inside
//! a plot box so the mapping is testable without a DOM.

#[cfg(test)]
#[path = "chart_geometry_test.rs"]
mod chart_geometry_test;

use std::fmt::Write as _;

/// Drawing area inside an SVG viewBox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotBox {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Y coordinate of `value` on a `[0, max]` axis. Values clamp to the box.
    #[must_use]
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.bottom();
        }
        self.bottom() - (value / max).clamp(0.0, 1.0) * self.height
    }

    /// Center x of slot `index` among `count` equal slots.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_center(&self, index: usize, count: usize) -> f64 {
        let slot = self.width / count.max(1) as f64;
        self.left + slot * (index as f64 + 0.5)
    }
}

/// Polyline path through `values`, one point per slot.
#[must_use]
pub fn line_path(plot: &PlotBox, values: &[f64], max: f64) -> String {
    let mut path = String::new();
    for (i, value) in values.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{command}{:.1},{:.1} ", plot.slot_center(i, values.len()), plot.y_for(*value, max));
    }
    path.trim_end().to_owned()
}

/// Axis tick values `0, step, 2*step, ..., max`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    let step = max / count as f64;
    (0..=count).map(|i| step * i as f64).collect()
}

/// Stacked bar: an actual segment with the projection remainder above it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackedBar {
    pub x: f64,
    pub width: f64,
    pub actual_y: f64,
    pub actual_height: f64,
    pub projection_y: f64,
    pub projection_height: f64,
}

/// Bars for `(actual, projection)` pairs. The projection bar spans the
/// larger of the two values so the actual part always sits inside it.
#[must_use]
pub fn stacked_bars(plot: &PlotBox, pairs: &[(f64, f64)], max: f64, bar_width: f64) -> Vec<StackedBar> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, &(actual, projection))| {
            let x = plot.slot_center(i, pairs.len()) - bar_width / 2.0;
            let actual_y = plot.y_for(actual, max);
            let projection_y = plot.y_for(actual.max(projection), max);
            StackedBar {
                x,
                width: bar_width,
                actual_y,
                actual_height: plot.bottom() - actual_y,
                projection_y,
                projection_height: actual_y - projection_y,
            }
        })
        .collect()
}

/// One ring segment drawn with `stroke-dasharray` on a circle.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub percent: f64,
    pub dash_array: String,
    /// Negative offset that starts this segment where the previous ended.
    pub dash_offset: f64,
}

/// Split a circle of `radius` into segments proportional to `values`.
/// `gap` is subtracted from each segment's visible length.
#[must_use]
pub fn donut_segments(values: &[f64], radius: f64, gap: f64) -> Vec<DonutSegment> {
    let total = values.iter().filter(|v| **v > 0.0).sum::<f64>();
    if total <= 0.0 {
        return Vec::new();
    }
    let circumference = std::f64::consts::TAU * radius;
    let mut consumed = 0.0;
    values
        .iter()
        .map(|value| {
            let share = value.max(0.0) / total;
            let length = share * circumference;
            let visible = (length - gap).max(0.0);
            let segment = DonutSegment {
                percent: share * 100.0,
                dash_array: format!("{visible:.2} {:.2}", circumference - visible),
                dash_offset: -consumed,
            };
            consumed += length;
            segment
        })
        .collect()
}

/// `part / total` as a percentage, 0 when `total` is not positive.
#[must_use]
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total <= 0.0 { 0.0 } else { part / total * 100.0 }
}

/// Axis label in thousands, `"0"` for zero, e.g. `20000 -> "20M"`.
#[must_use]
pub fn thousands_label(value: f64) -> String {
    if value == 0.0 { "0".to_owned() } else { format!("{}M", value / 1000.0) }
}
