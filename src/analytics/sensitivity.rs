use std::ops::RangeInclusive;

use crate::profile::{FeatureVector, FEATURE_COUNT};
use crate::scoring::ScoringModel;

/// Sweep one field over an integer range, predicting at each value.
///
/// The iterator is lazy and `Clone`, so callers can restart or re-consume it
/// without recomputing eagerly. Values are produced in ascending order.
pub fn sensitivity_curve(
    model: &ScoringModel,
    base: FeatureVector,
    index: usize,
    range: RangeInclusive<i64>,
) -> impl Iterator<Item = (i64, f64)> + Clone + '_ {
    assert!(index < FEATURE_COUNT, "feature index out of range: {}", index);
    range.map(move |value| {
        let score = model.predict(&base.with_value(index, value as f64));
        (value, score)
    })
}

/// One axis of a two-field sweep.
#[derive(Debug, Clone, Copy)]
pub struct GridAxis {
    pub index: usize,
    pub lo: i64,
    pub hi: i64,
    pub step: i64,
}

impl GridAxis {
    pub fn values(&self) -> Vec<i64> {
        assert!(self.step > 0, "grid step must be positive");
        let mut values = Vec::new();
        let mut v = self.lo;
        while v <= self.hi {
            values.push(v);
            v += self.step;
        }
        values
    }
}

/// Scores over the cartesian product of two axes; `cells[y][x]`.
#[derive(Debug, Clone)]
pub struct ScoreGrid {
    pub x_values: Vec<i64>,
    pub y_values: Vec<i64>,
    pub cells: Vec<Vec<f64>>,
}

impl ScoreGrid {
    /// Lowest and highest cell, for color scaling.
    pub fn bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in &self.cells {
            for cell in row {
                lo = lo.min(*cell);
                hi = hi.max(*cell);
            }
        }
        (lo, hi)
    }
}

/// Sweep two fields, holding everything else at `base`.
pub fn score_grid(
    model: &ScoringModel,
    base: FeatureVector,
    x_axis: GridAxis,
    y_axis: GridAxis,
) -> ScoreGrid {
    let x_values = x_axis.values();
    let y_values = y_axis.values();

    let cells = y_values
        .iter()
        .map(|y| {
            let row_base = base.with_value(y_axis.index, *y as f64);
            x_values
                .iter()
                .map(|x| model.predict(&row_base.with_value(x_axis.index, *x as f64)))
                .collect()
        })
        .collect();

    ScoreGrid {
        x_values,
        y_values,
        cells,
    }
}

/// Score with every field at its documented maximum.
pub fn max_achievable_score(model: &ScoringModel) -> f64 {
    model.predict(&FeatureVector::all_maximums())
}

/// Headroom between the best possible profile and the current score.
pub fn potential_gain(model: &ScoringModel, current_score: f64) -> f64 {
    (max_achievable_score(model) - current_score).max(0.0)
}
