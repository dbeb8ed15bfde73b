use crate::error::{Error, Result};
use crate::experiment::{load_csv, ResultRow};
use crate::order::Strategy;
use log::info;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

pub const FIRST_FIT_RESULTS: &str = "results_firstfit_family.csv";
pub const CBIP_RESULTS: &str = "results_cbip.csv";

/**
 * Change in the mean competitive ratio of one algorithm, for one 'k', between
 * the smallest and the largest tested 'n'.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Growth {
    pub algorithm: String,
    pub k: usize,
    pub first_n: usize,
    pub first_ratio: f64,
    pub last_n: usize,
    pub last_ratio: f64,
}

impl Growth {
    /// Relative growth, as a percentage of the smallest-'n' ratio.
    pub fn percent(&self) -> f64 {
        (self.last_ratio - self.first_ratio) / self.first_ratio * 100.0
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} (k={}):", self.algorithm, self.k)?;
        writeln!(f, "  n={}: ρ={:.4}", self.first_n, self.first_ratio)?;
        writeln!(f, "  n={}: ρ={:.4}", self.last_n, self.last_ratio)?;
        writeln!(f, "  Growth: {:.2}%", self.percent())
    }
}

/**
 *  Growth trends for each FirstFit variant and each 'k', in ascending 'k'.
 *  Combinations with fewer than two tested 'n' values are skipped.
 */
pub fn growth_trends(rows: &[ResultRow]) -> Vec<Growth> {
    let ks: BTreeSet<usize> = rows.iter().map(|r| r.k).collect();
    let mut trends = Vec::new();

    for strategy in Strategy::ALL {
        let name = strategy.algorithm_name();
        for &k in ks.iter() {
            let mut data: Vec<&ResultRow> = rows
                .iter()
                .filter(|r| r.algorithm == name && r.k == k)
                .collect();
            if data.len() < 2 {
                continue;
            }
            data.sort_by_key(|r| r.n);
            let (first, last) = (data[0], data[data.len() - 1]);
            trends.push(Growth {
                algorithm: name.to_string(),
                k,
                first_n: first.n,
                first_ratio: first.avg_ratio,
                last_n: last.n,
                last_ratio: last.avg_ratio,
            });
        }
    }
    trends
}

fn rows_for(rows: &[ResultRow], algorithm: &str, k: usize) -> Vec<ResultRow> {
    let mut selected: Vec<ResultRow> = rows
        .iter()
        .filter(|r| r.algorithm == algorithm && r.k == k)
        .cloned()
        .collect();
    selected.sort_by_key(|r| r.n);
    selected
}

/**
 *  Average percentage improvement, of 'other' over 'base', in the mean
 *  competitive ratios. Rows are paired up by ascending 'n'.
 */
pub fn improvement(base: &[ResultRow], other: &[ResultRow]) -> Option<f64> {
    let pcts: Vec<f64> = base
        .iter()
        .zip(other.iter())
        .map(|(b, o)| (b.avg_ratio - o.avg_ratio) / b.avg_ratio * 100.0)
        .collect();
    if pcts.is_empty() {
        return None;
    }
    Some(pcts.iter().sum::<f64>() / pcts.len() as f64)
}

/**
 *  Improvement of the degree and smallest-last heuristics, and of CBIP, over
 *  plain FirstFit on the 'k = 2' graphs. Algorithms without 'k = 2' results
 *  are left out.
 */
pub fn improvements_over_first_fit(
    ff_rows: &[ResultRow],
    cbip_rows: &[ResultRow],
) -> Vec<(&'static str, f64)> {
    let plain = rows_for(ff_rows, Strategy::Random.algorithm_name(), 2);
    let others = [
        (
            Strategy::Degree.algorithm_name(),
            rows_for(ff_rows, Strategy::Degree.algorithm_name(), 2),
        ),
        (
            Strategy::SmallestLast.algorithm_name(),
            rows_for(ff_rows, Strategy::SmallestLast.algorithm_name(), 2),
        ),
        ("CBIP", rows_for(cbip_rows, "CBIP", 2)),
    ];

    others
        .iter()
        .filter_map(|(name, rows)| improvement(&plain, rows).map(|pct| (*name, pct)))
        .collect()
}

/**
 *  Loads the FirstFit-family and CBIP results previously saved within
 *  'directory'.
 */
pub fn load_results<P: AsRef<Path>>(directory: P) -> Result<(Vec<ResultRow>, Vec<ResultRow>)> {
    let dir = directory.as_ref();
    let (ff_path, cbip_path) = (dir.join(FIRST_FIT_RESULTS), dir.join(CBIP_RESULTS));
    if !ff_path.is_file() || !cbip_path.is_file() {
        return Err(Error::InvalidArgument(format!(
            "Results files not found in '{}'; run the experiments first",
            dir.display()
        )));
    }

    let ff_rows = load_csv(&ff_path)?;
    let cbip_rows = load_csv(&cbip_path)?;
    info!(
        "Loaded {} FirstFit family results, and {} CBIP results",
        ff_rows.len(),
        cbip_rows.len()
    );
    Ok((ff_rows, cbip_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{save_csv, RatioStats};

    fn row(algorithm: &str, k: usize, n: usize, avg: f64) -> ResultRow {
        let stats = RatioStats {
            avg,
            sd: 0.0,
            min: avg,
            max: avg,
        };
        ResultRow::new(algorithm, k, n, 10, stats)
    }

    #[test]
    fn growth_between_smallest_and_largest_n() {
        let rows = vec![
            row("FirstFit", 2, 400, 2.5),
            row("FirstFit", 2, 50, 2.0),
            row("FirstFit", 2, 100, 2.2),
            row("FirstFit", 3, 50, 1.5),
            row("FirstFit+Degree", 2, 50, 1.0),
            row("FirstFit+Degree", 2, 400, 1.0),
        ];
        let trends = growth_trends(&rows);

        // 'k = 3' has a single 'n', so it is skipped
        assert_eq!(2, trends.len());
        let ff = &trends[0];
        assert_eq!(("FirstFit", 2, 50, 400), (ff.algorithm.as_str(), ff.k, ff.first_n, ff.last_n));
        assert!((ff.percent() - 25.0).abs() < 1e-9);
        assert!(ff.to_string().contains("Growth: 25.00%"));
        assert_eq!(0.0, trends[1].percent());
    }

    #[test]
    fn improvements_pair_rows_by_n() {
        let ff = vec![
            row("FirstFit", 2, 100, 2.0),
            row("FirstFit", 2, 50, 1.6),
            row("FirstFit+SmallestLast", 2, 50, 1.2),
            row("FirstFit+SmallestLast", 2, 100, 1.0),
            row("FirstFit", 3, 50, 9.0),
        ];
        let cbip = vec![row("CBIP", 2, 50, 1.6), row("CBIP", 2, 100, 1.0)];

        let imps = improvements_over_first_fit(&ff, &cbip);
        // No degree-ordered results, so that comparison is left out
        assert_eq!(2, imps.len());
        assert_eq!("FirstFit+SmallestLast", imps[0].0);
        assert!((imps[0].1 - 37.5).abs() < 1e-9);
        assert_eq!("CBIP", imps[1].0);
        assert!((imps[1].1 - 25.0).abs() < 1e-9);

        assert_eq!(None, improvement(&[], &cbip));
    }

    #[test]
    fn saved_results_load_back() {
        let dir = std::env::temp_dir()
            .join(format!("online-colouring-analysis-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let ff = vec![row("FirstFit", 2, 50, 1.75), row("FirstFit", 2, 100, 2.125)];
        let cbip = vec![row("CBIP", 2, 50, 1.5)];
        save_csv(&ff, dir.join(FIRST_FIT_RESULTS)).unwrap();
        save_csv(&cbip, dir.join(CBIP_RESULTS)).unwrap();

        let (ff_loaded, cbip_loaded) = load_results(&dir).unwrap();
        assert_eq!(ff, ff_loaded);
        assert_eq!(cbip, cbip_loaded);

        std::fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(load_results(&dir), Err(Error::InvalidArgument(_))));
    }
}
