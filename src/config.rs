use crate::logging::{log, obj, v_str, Domain, Level};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    /// Decimal places for mean and std dev in text output.
    pub decimals: usize,
    /// Restrict the report to one dataset.
    pub dataset: Option<String>,
    /// Dataset whose best value the run statistics are compared against.
    pub reference_dataset: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            decimals: 2,
            dataset: None,
            reference_dataset: "knapsack_test50.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable keys keep defaults.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let format = match get("REPORT_FORMAT") {
            Some(raw) => OutputFormat::parse(&raw).unwrap_or_else(|| {
                log(
                    Level::Warn,
                    Domain::System,
                    "config_fallback",
                    obj(&[
                        ("key", v_str("REPORT_FORMAT")),
                        ("value", v_str(&raw)),
                        ("using", v_str(defaults.format.as_str())),
                    ]),
                );
                defaults.format
            }),
            None => defaults.format,
        };
        Self {
            format,
            decimals: get("REPORT_DECIMALS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.decimals),
            dataset: get("REPORT_DATASET").filter(|v| !v.trim().is_empty()),
            reference_dataset: get("REFERENCE_DATASET").unwrap_or(defaults.reference_dataset),
        }
    }

    /// First 16 hex digits of the SHA-256 of the canonical config line.
    pub fn hash(&self) -> String {
        let canonical = format!(
            "format={}|decimals={}|dataset={}|reference={}",
            self.format.as_str(),
            self.decimals,
            self.dataset.as_deref().unwrap_or("*"),
            self.reference_dataset
        );
        let digest = hex::encode(Sha256::digest(canonical.as_bytes()));
        digest[..16].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.decimals, 2);
        assert_eq!(cfg.reference_dataset, "knapsack_test50.txt");
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("REPORT_FORMAT", "TEXT"),
            ("REPORT_DECIMALS", "4"),
            ("REPORT_DATASET", "knapsack_test100.txt"),
            ("REFERENCE_DATASET", "knapsack_test100.txt"),
        ]));
        assert_eq!(cfg.format, OutputFormat::Text);
        assert_eq!(cfg.decimals, 4);
        assert_eq!(cfg.dataset.as_deref(), Some("knapsack_test100.txt"));
        assert_eq!(cfg.reference_dataset, "knapsack_test100.txt");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[
            ("REPORT_FORMAT", "yaml"),
            ("REPORT_DECIMALS", "two"),
            ("REPORT_DATASET", "  "),
        ]));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.decimals, 2);
        assert!(cfg.dataset.is_none());
    }

    #[test]
    fn test_hash_tracks_changes() {
        let a = Config::default();
        let mut b = Config::default();
        assert_eq!(a.hash(), b.hash());
        b.decimals = 3;
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_hash_is_fixed_across_builds() {
        assert_eq!(Config::default().hash(), "7211583077c17f44");
    }
}
