//! Descriptive statistics over repeated randomized-greedy runs.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Summary of a run sequence. Values are stored unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsBundle {
    pub count: usize,
    pub mean: f64,
    /// Population variance (divisor N).
    pub variance: f64,
    pub std_dev: f64,
    pub max: f64,
    pub min: f64,
}

/// Mean, population variance, standard deviation, max and min of `runs`.
pub fn compute_statistics(runs: &[f64]) -> Result<StatisticsBundle> {
    let (&first, rest) = runs
        .split_first()
        .ok_or(CoreError::EmptyInput { what: "compute_statistics" })?;

    let mut max = first;
    let mut min = first;
    for &x in rest {
        if x > max {
            max = x;
        }
        if x < min {
            min = x;
        }
    }

    // Constant input: the mean is the element itself and the spread is exactly zero.
    if runs.iter().all(|&x| x == first) {
        return Ok(StatisticsBundle {
            count: runs.len(),
            mean: first,
            variance: 0.0,
            std_dev: 0.0,
            max,
            min,
        });
    }

    // Deviations are taken from `min` and scaled by the range so that
    // neither the sum nor the squares leave f64 range for finite input.
    let n = runs.len() as f64;
    let range = max - min;
    let mean_offset = runs.iter().map(|x| x - min).sum::<f64>() / n;
    let scaled_var = runs
        .iter()
        .map(|x| ((x - min - mean_offset) / range).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = range * scaled_var.sqrt();

    Ok(StatisticsBundle {
        count: runs.len(),
        mean: min + mean_offset,
        variance: std_dev * std_dev,
        std_dev,
        max,
        min,
    })
}

/// Ordered totals from independent executions of a randomized procedure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunSequence {
    runs: Vec<f64>,
}

/// Thirty randomized-greedy totals on knapsack_test50.
const BUILTIN_RUNS: [f64; 30] = [
    1620.0, 1546.0, 1518.0, 1401.0, 1444.0, 1620.0, 1378.0, 1568.0, 1343.0, 1467.0, 1407.0,
    1395.0, 1407.0, 1366.0, 1561.0, 1450.0, 1520.0, 1608.0, 1529.0, 1620.0, 1620.0, 1454.0,
    1390.0, 1530.0, 1585.0, 1456.0, 1547.0, 1362.0, 1620.0, 1620.0,
];

impl RunSequence {
    pub fn new(runs: Vec<f64>) -> Self {
        Self { runs }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_RUNS.to_vec())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// `(run, value)` pairs with 1-based run numbers.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.runs.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }

    /// A new sequence with `value` appended.
    pub fn with_run(&self, value: f64) -> Self {
        let mut runs = self.runs.clone();
        runs.push(value);
        Self { runs }
    }

    pub fn statistics(&self) -> Result<StatisticsBundle> {
        compute_statistics(&self.runs)
    }

    /// Statistics of every prefix `runs[..k]`, k = 1..=N, each recomputed
    /// from scratch.
    pub fn prefix_statistics(&self) -> Vec<StatisticsBundle> {
        (1..=self.runs.len())
            .filter_map(|k| compute_statistics(&self.runs[..k]).ok())
            .collect()
    }

    /// Number of runs whose total equals `target` exactly.
    pub fn hits_at(&self, target: f64) -> usize {
        self.runs.iter().filter(|&&v| v == target).count()
    }
}

impl From<Vec<f64>> for RunSequence {
    fn from(runs: Vec<f64>) -> Self {
        Self::new(runs)
    }
}
