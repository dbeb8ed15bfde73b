use crate::cbip::{cbip, cbip_with_rng};
use crate::colouring::Colouring;
use crate::config::ExperimentConfig;
use crate::error::{Error, Result};
use crate::first_fit::{
    first_fit_degree, first_fit_seeded, first_fit_smallest_last, first_fit_with,
};
use crate::generator::generate_k_colourable;
use crate::graph::Graph;
use crate::order::Strategy;
use crate::validate::validate_coloring;
use csv::ReaderBuilder;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column names of the saved results, in file order.
pub const CSV_COLUMNS: [&str; 8] = [
    "Algorithm",
    "k",
    "n",
    "N",
    "avg_ratio",
    "sd_ratio",
    "min_ratio",
    "max_ratio",
];

/**
 * Summary statistics of the competitive ratios from repeated trials.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioStats {
    pub avg: f64,
    /// Sample standard deviation (with an 'N - 1' denominator).
    pub sd: f64,
    pub min: f64,
    pub max: f64,
}

impl RatioStats {
    /**
     *  Returns 'None' when there are no ratios to summarise.
     */
    pub fn from_ratios(ratios: &[f64]) -> Option<Self> {
        if ratios.is_empty() {
            return None;
        }
        let n = ratios.len() as f64;
        let avg = ratios.iter().sum::<f64>() / n;
        let sd = if ratios.len() > 1 {
            let var = ratios.iter().map(|x| (x - avg).powi(2)).sum::<f64>() / (n - 1.0);
            var.sqrt()
        } else {
            0.0
        };
        let min = ratios.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self { avg, sd, min, max })
    }
}

/**
 * One row of the experiment results, for a single algorithm and '(k, n)'.
 *
 * The serde names are the CSV column names, so rows are written and read
 * back directly through the 'csv' crate.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    pub k: usize,
    pub n: usize,
    #[serde(rename = "N")]
    pub trials: usize,
    pub avg_ratio: f64,
    pub sd_ratio: f64,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl ResultRow {
    pub fn new(algorithm: &str, k: usize, n: usize, trials: usize, stats: RatioStats) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            k,
            n,
            trials,
            avg_ratio: stats.avg,
            sd_ratio: stats.sd,
            min_ratio: stats.min,
            max_ratio: stats.max,
        }
    }

    pub fn stats(&self) -> RatioStats {
        RatioStats {
            avg: self.avg_ratio,
            sd: self.sd_ratio,
            min: self.min_ratio,
            max: self.max_ratio,
        }
    }
}

// -- CSV INPUT & OUTPUT -- //

/**
 *  Writes the rows as CSV, with a header line. The header is written even
 *  when there are no rows.
 */
pub fn write_csv<W: Write>(rows: &[ResultRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    if rows.is_empty() {
        writer.write_record(CSV_COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_csv<P: AsRef<Path>>(rows: &[ResultRow], path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Saving {} result rows to: {}", rows.len(), path.display());
    write_csv(rows, File::create(path)?)
}

pub fn read_csv<R: Read>(input: R) -> Result<Vec<ResultRow>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let rows = reader
        .deserialize::<ResultRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRow>> {
    let path = path.as_ref();
    debug!("Loading results from: {}", path.display());
    read_csv(File::open(path)?)
}

/**
 * Runs the competitive-ratio experiments, drawing every random graph and
 * random presentation order from one seeded generator.
 */
pub struct ExperimentRunner {
    config: ExperimentConfig,
    rng: StdRng,
}

impl ExperimentRunner {
    pub fn new(config: ExperimentConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /**
     *  Runs all three FirstFit variants on the same graphs, for every
     *  '(k, n)' combination, and returns a row per variant and combination.
     *
     *  Note: the ratio uses 'k' in place of the chromatic number, which it
     *    bounds from above for these generated graphs.
     */
    pub fn run_first_fit_family(&mut self) -> Result<Vec<ResultRow>> {
        let mut rows = Vec::new();
        let (n_values, k_values) = (self.config.n_values.clone(), self.config.k_values.clone());
        let total = n_values.len() * k_values.len();
        let mut count = 0;

        for &k in k_values.iter() {
            for &n in n_values.iter() {
                count += 1;
                info!("[{}/{}] FirstFit family: k={}, n={}", count, total, k, n);

                let mut ratios: Vec<Vec<f64>> = vec![Vec::new(); Strategy::ALL.len()];
                for _ in 0..self.config.trials {
                    let (graph, _) = generate_k_colourable(n, k, self.config.p, &mut self.rng)?;
                    for (i, strategy) in Strategy::ALL.iter().enumerate() {
                        let colouring = first_fit_with(&graph, *strategy, &mut self.rng);
                        check(&graph, &colouring, strategy.algorithm_name())?;
                        ratios[i].push(colouring.max_colour() as f64 / k as f64);
                    }
                }

                for (strategy, rs) in Strategy::ALL.iter().zip(ratios.iter()) {
                    rows.push(self.row(strategy.algorithm_name(), k, n, rs)?);
                }
            }
        }

        Ok(rows)
    }

    /**
     *  Runs CBIP on random bipartite ('k = 2') graphs, for every 'n'.
     */
    pub fn run_cbip(&mut self) -> Result<Vec<ResultRow>> {
        let k = 2;
        let mut rows = Vec::new();
        let n_values = self.config.n_values.clone();

        for (idx, &n) in n_values.iter().enumerate() {
            info!("[{}/{}] CBIP: k=2, n={}", idx + 1, n_values.len(), n);

            let mut ratios = Vec::with_capacity(self.config.trials);
            for _ in 0..self.config.trials {
                let (graph, _) = generate_k_colourable(n, k, self.config.p, &mut self.rng)?;
                let colouring = cbip_with_rng(&graph, &mut self.rng)?;
                check(&graph, &colouring, "CBIP")?;
                ratios.push(colouring.max_colour() as f64 / k as f64);
            }
            rows.push(self.row("CBIP", k, n, &ratios)?);
        }

        Ok(rows)
    }

    fn row(&self, algorithm: &str, k: usize, n: usize, ratios: &[f64]) -> Result<ResultRow> {
        let stats = RatioStats::from_ratios(ratios).ok_or_else(|| {
            Error::InvalidArgument("experiments need at least one trial".to_string())
        })?;
        Ok(ResultRow::new(algorithm, k, n, ratios.len(), stats))
    }
}

/**
 *  Colours 'graph' with the algorithm named 'algorithm' ("cbip", or any
 *  FirstFit ordering strategy name). The seed only applies to the random
 *  presentation orders, of "random" and "cbip".
 */
pub fn colour_by_name(graph: &Graph, algorithm: &str, seed: Option<u64>) -> Result<Colouring> {
    if algorithm.eq_ignore_ascii_case("cbip") {
        return cbip(graph, seed);
    }
    let strategy = algorithm.parse::<Strategy>()?;
    if seed.is_some() && strategy != Strategy::Random {
        warn!("Ignoring the seed, as the '{}' order is deterministic", strategy);
    }
    let colouring = match strategy {
        Strategy::Random => first_fit_seeded(graph, seed),
        Strategy::Degree => first_fit_degree(graph),
        Strategy::SmallestLast => first_fit_smallest_last(graph),
    };
    Ok(colouring)
}

fn check(graph: &Graph, colouring: &Colouring, algorithm: &str) -> Result<()> {
    let verdict = validate_coloring(graph, colouring);
    if verdict.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidColouring(format!("{}: {}", algorithm, verdict)))
    }
}
