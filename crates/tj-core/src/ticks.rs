//! Axis tick generation and value snapping/formatting.
//!
//! Supports the chart and slider layers: tick spacing is a power of ten
//! derived from the plotted range, scaled down when too few ticks would fit.

use crate::numeric::Real;

/// Tick spacing for a range, power-of-ten based.
///
/// Returns 0 for degenerate (non-positive or non-finite) ranges.
pub fn tick_step(range: Real) -> Real {
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    let mut step = 10f64.powf(range.log10().floor());
    // Keep at least ~4 tick intervals in view
    if range / step < 2.0 {
        step /= 5.0;
    } else if range / step < 4.0 {
        step /= 2.0;
    }
    step
}

/// Tick positions inside `[min, max]`: every multiple of the tick step.
pub fn ticks(min: Real, max: Real) -> Vec<Real> {
    let step = tick_step(max - min);
    if step == 0.0 {
        return Vec::new();
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as Real * step).collect()
}

/// Snap a value to the nearest multiple of `step`.
///
/// A non-positive step leaves the value unchanged.
pub fn snap(value: Real, step: Real) -> Real {
    if step > 0.0 && step.is_finite() {
        (value / step).round() * step
    } else {
        value
    }
}

/// Number of decimal places implied by a step granularity.
pub fn step_decimals(step: Real) -> usize {
    if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    }
}

/// Format a value with the decimal places implied by its step.
pub fn format_value(value: Real, step: Real) -> String {
    format!("{:.*}", step_decimals(step), value)
}
