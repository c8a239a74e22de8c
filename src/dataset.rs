//! Benchmark result records and the ordered dataset registry.
//!
//! Each dataset is one knapsack instance file; its records are the per-method
//! outcomes in evaluation order. The registry is immutable once built.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// One method's outcome on one problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub method: String,
    pub value: u64,
    pub weight: u64,
    pub item_count: u64,
}

impl AlgorithmResult {
    pub fn new(method: impl Into<String>, value: u64, weight: u64, item_count: u64) -> Self {
        Self {
            method: method.into(),
            value,
            weight,
            item_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub records: Vec<AlgorithmResult>,
}

impl Dataset {
    /// Name without the `.txt` suffix, as shown on dataset cards.
    pub fn display_name(&self) -> String {
        self.name.replacen(".txt", "", 1)
    }
}

/// Ordered mapping from dataset name to its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetRegistry {
    datasets: Vec<Dataset>,
}

impl DatasetRegistry {
    /// Build a registry, rejecting empty datasets and repeated names.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<AlgorithmResult>)>,
        S: Into<String>,
    {
        let mut datasets: Vec<Dataset> = Vec::new();
        for (name, records) in entries {
            let name = name.into();
            if records.is_empty() {
                return Err(CoreError::EmptyDataset { name });
            }
            if datasets.iter().any(|d| d.name == name) {
                return Err(CoreError::DuplicateDataset { name });
            }
            datasets.push(Dataset { name, records });
        }
        Ok(Self { datasets })
    }

    /// Results from the greedy-vs-DP benchmark on the three test instances.
    pub fn builtin() -> Self {
        fn rows(r: &[(&str, u64, u64, u64)]) -> Vec<AlgorithmResult> {
            r.iter()
                .map(|&(m, v, w, n)| AlgorithmResult::new(m, v, w, n))
                .collect()
        }
        let datasets = vec![
            Dataset {
                name: "knapsack_test50.txt".to_string(),
                records: rows(&[
                    ("Greedy (value)", 1269, 348, 14),
                    ("Greedy (weight)", 1468, 346, 22),
                    ("Greedy (ratio)", 1620, 346, 21),
                    ("Dynamic (Optimal)", 1622, 348, 21),
                ]),
            },
            Dataset {
                name: "knapsack_test100.txt".to_string(),
                records: rows(&[
                    ("Greedy (value)", 2442, 634, 31),
                    ("Greedy (weight)", 2514, 633, 48),
                    ("Greedy (ratio)", 2806, 631, 43),
                    ("Dynamic (Optimal)", 2820, 636, 42),
                ]),
            },
            Dataset {
                name: "knapsack_test1000.txt".to_string(),
                records: rows(&[
                    ("Greedy (value)", 23140, 6853, 262),
                    ("Greedy (weight)", 25488, 6832, 459),
                    ("Greedy (ratio)", 28970, 6854, 404),
                    ("Dynamic (Optimal)", 28974, 6856, 403),
                ]),
            },
        ];
        Self { datasets }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.datasets.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Registry restricted to a single dataset, if present.
    pub fn only(&self, name: &str) -> Option<Self> {
        self.get(name).map(|d| Self {
            datasets: vec![d.clone()],
        })
    }
}

impl<'a> IntoIterator for &'a DatasetRegistry {
    type Item = &'a Dataset;
    type IntoIter = std::slice::Iter<'a, Dataset>;

    fn into_iter(self) -> Self::IntoIter {
        self.datasets.iter()
    }
}
