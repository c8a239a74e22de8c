//! Dashboard report: everything the presentation surface shows, assembled
//! from best-record selection and run statistics.

use crate::dataset::{AlgorithmResult, DatasetRegistry};
use crate::error::Result;
use crate::logging::{
    log, log_best_selected, log_run_statistics, obj, ts_now, v_str, Domain, Level, ProfileScope,
};
use crate::select::select_best;
use crate::stats::{RunSequence, StatisticsBundle};
use serde::Serialize;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Card contents for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub name: String,
    pub display_name: String,
    pub method_count: usize,
    pub best_value: u64,
    pub best_method: String,
    pub best_weight: u64,
    pub best_item_count: u64,
    pub records: Vec<AlgorithmResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunPoint {
    pub run: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunsSummary {
    pub statistics: StatisticsBundle,
    pub hits_at_max: usize,
    pub points: Vec<RunPoint>,
}

/// Run statistics set against a dataset's best reported value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceComparison {
    pub dataset: String,
    pub reference_method: String,
    pub reference_value: u64,
    pub mean_ratio: f64,
    pub max_gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub input_fingerprint: String,
    pub datasets: Vec<DatasetSummary>,
    pub runs: RunsSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceComparison>,
}

pub fn summarize_dataset(
    name: &str,
    display_name: String,
    records: &[AlgorithmResult],
) -> Result<DatasetSummary> {
    let best = select_best(records)?;
    log_best_selected(name, &best.method, best.value, records.len());
    Ok(DatasetSummary {
        name: name.to_string(),
        display_name,
        method_count: records.len(),
        best_value: best.value,
        best_method: best.method.clone(),
        best_weight: best.weight,
        best_item_count: best.item_count,
        records: records.to_vec(),
    })
}

pub fn summarize_runs(runs: &RunSequence) -> Result<RunsSummary> {
    let statistics = runs.statistics()?;
    log_run_statistics(
        statistics.count,
        statistics.mean,
        statistics.std_dev,
        statistics.max,
        statistics.min,
    );
    Ok(RunsSummary {
        hits_at_max: runs.hits_at(statistics.max),
        points: runs
            .indexed()
            .map(|(run, value)| RunPoint { run, value })
            .collect(),
        statistics,
    })
}

/// Compare against `dataset`'s best record. `None` when the dataset is
/// missing or its best value is zero.
pub fn compare_to_reference(
    registry: &DatasetRegistry,
    dataset: &str,
    stats: &StatisticsBundle,
) -> Option<ReferenceComparison> {
    let ds = registry.get(dataset)?;
    let best = select_best(&ds.records).ok()?;
    if best.value == 0 {
        return None;
    }
    let reference = best.value as f64;
    Some(ReferenceComparison {
        dataset: ds.name.clone(),
        reference_method: best.method.clone(),
        reference_value: best.value,
        mean_ratio: stats.mean / reference,
        max_gap: reference - stats.max,
    })
}

/// SHA-256 over the canonical JSON of the inputs.
pub fn input_fingerprint(registry: &DatasetRegistry, runs: &RunSequence) -> String {
    let canonical = json!({ "datasets": registry, "runs": runs }).to_string();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

impl Report {
    /// Report over `registry` and `runs` without a reference comparison.
    pub fn build(registry: &DatasetRegistry, runs: &RunSequence) -> Result<Self> {
        let _scope = ProfileScope::with_context(
            "report_build",
            &[("datasets", json!(registry.len())), ("runs", json!(runs.len()))],
        );

        if registry.is_empty() {
            log(Level::Warn, Domain::Report, "no_datasets", obj(&[]));
        }
        let datasets = registry
            .iter()
            .map(|d| summarize_dataset(&d.name, d.display_name(), &d.records))
            .collect::<Result<Vec<_>>>()?;
        let runs_summary = summarize_runs(runs)?;

        Ok(Self {
            generated_at: ts_now(),
            input_fingerprint: input_fingerprint(registry, runs),
            datasets,
            runs: runs_summary,
            reference: None,
        })
    }

    /// Attach a comparison against `dataset` from `registry`, which need not
    /// be the registry the report was built from.
    pub fn with_reference(mut self, registry: &DatasetRegistry, dataset: &str) -> Self {
        self.reference = compare_to_reference(registry, dataset, &self.runs.statistics);
        if self.reference.is_none() {
            log(
                Level::Info,
                Domain::Report,
                "reference_skipped",
                obj(&[("dataset", v_str(dataset))]),
            );
        }
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Plain-text rendering; mean and std dev use `decimals` places.
    pub fn render_text(&self, decimals: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Knapsack Algorithm Comparison");
        for d in &self.datasets {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", d.display_name);
            let _ = writeln!(
                out,
                "  Methods: {}  Best Value: {}  Optimal: {}",
                d.method_count, d.best_value, d.best_method
            );
            for r in &d.records {
                let _ = writeln!(
                    out,
                    "  {:<20} value={:>6} weight={:>6} items={:>4}",
                    r.method, r.value, r.weight, r.item_count
                );
            }
        }

        let s = &self.runs.statistics;
        let _ = writeln!(out);
        let _ = writeln!(out, "Randomized Greedy ({} runs)", s.count);
        let _ = writeln!(out, "  Mean:    {:.*}", decimals, s.mean);
        let _ = writeln!(out, "  Std Dev: {:.*}", decimals, s.std_dev);
        let _ = writeln!(out, "  Max:     {}", s.max);
        let _ = writeln!(out, "  Min:     {}", s.min);
        let _ = writeln!(out, "  Runs at max: {}", self.runs.hits_at_max);
        if let Some(r) = &self.reference {
            let _ = writeln!(
                out,
                "  Reference: {} on {} = {} (mean ratio {:.*}, max gap {})",
                r.reference_method, r.dataset, r.reference_value, decimals, r.mean_ratio, r.max_gap
            );
        }
        out
    }
}
