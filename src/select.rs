//! Best-result selection by reported value.

use crate::dataset::AlgorithmResult;
use crate::error::{CoreError, Result};

/// Return the record with the highest `value`.
///
/// Left-to-right scan with a strict `>` comparison, so among equal maxima the
/// earliest record is kept. Optimality is not checked; a record labelled
/// "Optimal" ranks like any other.
pub fn select_best(records: &[AlgorithmResult]) -> Result<&AlgorithmResult> {
    let (first, rest) = records
        .split_first()
        .ok_or(CoreError::EmptyInput { what: "select_best" })?;
    let mut best = first;
    for r in rest {
        if r.value > best.value {
            best = r;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetRegistry;

    fn rec(method: &str, value: u64) -> AlgorithmResult {
        AlgorithmResult::new(method, value, 0, 0)
    }

    #[test]
    fn test_knapsack_test50_picks_dp() {
        let records = vec![
            rec("Greedy-value", 1269),
            rec("Greedy-weight", 1468),
            rec("Greedy-ratio", 1620),
            rec("DP-Optimal", 1622),
        ];
        let best = select_best(&records).unwrap();
        assert_eq!(best.method, "DP-Optimal");
        assert_eq!(best.value, 1622);
    }

    #[test]
    fn test_tie_keeps_first() {
        let records = vec![rec("a", 5), rec("b", 9), rec("c", 9), rec("d", 1)];
        let best = select_best(&records).unwrap();
        assert_eq!(best.method, "b");
        assert!(std::ptr::eq(best, &records[1]));
    }

    #[test]
    fn test_single_record() {
        let records = vec![rec("only", 0)];
        assert_eq!(select_best(&records).unwrap().method, "only");
    }

    #[test]
    fn test_empty_is_error() {
        let err = select_best(&[]).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_builtin_best_is_dp_everywhere() {
        let reg = DatasetRegistry::builtin();
        let best: Vec<(u64, &str)> = reg
            .iter()
            .map(|d| {
                let b = select_best(&d.records).unwrap();
                (b.value, b.method.as_str())
            })
            .collect();
        assert_eq!(
            best,
            vec![
                (1622, "Dynamic (Optimal)"),
                (2820, "Dynamic (Optimal)"),
                (28974, "Dynamic (Optimal)"),
            ]
        );
    }
}
