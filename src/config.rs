use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/**
 * Parameters for a full set of competitive-ratio experiments.
 *
 * May be loaded from a YAML file, and any fields omitted from the file take
 * their default values.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Vertex-counts to test.
    pub n_values: Vec<usize>,
    /// Chromatic numbers (partition counts) to test.
    pub k_values: Vec<usize>,
    /// Probability of each additional cross-partition edge.
    pub p: f64,
    /// Number of graphs per '(k, n)' combination.
    pub trials: usize,
    /// Seed for the experiment random-number generator.
    pub seed: u64,
    /// Directory for the CSV results.
    pub output_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            n_values: vec![50, 100, 200, 400, 800, 1600],
            k_values: vec![2, 3, 4],
            p: 0.3,
            trials: 100,
            seed: 42,
            output_dir: PathBuf::from("results"),
        }
    }
}

impl fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Experiment Configuration:")?;
        writeln!(f, "  n values:          {:?}", self.n_values)?;
        writeln!(f, "  k values:          {:?}", self.k_values)?;
        writeln!(f, "  Edge probability:  {}", self.p)?;
        writeln!(f, "  Graphs per (k,n):  {}", self.trials)?;
        writeln!(f, "  Random seed:       {}", self.seed)?;
        writeln!(f, "  Output directory:  {}", self.output_dir.display())
    }
}

impl ExperimentConfig {
    /**
     *  Small settings, for a quick test-run.
     */
    pub fn quick() -> Self {
        Self {
            n_values: vec![50, 100],
            k_values: vec![2, 3],
            trials: 20,
            ..Default::default()
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = serde_yaml::from_reader(File::open(path)?)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_values.is_empty() || self.k_values.is_empty() {
            return Err(Error::InvalidArgument(
                "n_values and k_values must be non-empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(Error::InvalidArgument(format!(
                "p must be in [0.0, 1.0], got {}",
                self.p
            )));
        }
        if self.trials == 0 {
            return Err(Error::InvalidArgument(
                "trials must be at least 1".to_string(),
            ));
        }
        if let Some(&k) = self.k_values.iter().find(|&&k| k < 1) {
            return Err(Error::InvalidArgument(format!("k must be at least 1, got {}", k)));
        }
        Ok(())
    }
}

/**
 *  Parses a comma-separated list of integers, such as "50,100,200".
 */
pub fn parse_list(text: &str) -> Result<Vec<usize>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|e| Error::InvalidArgument(format!("'{}': {}", s, e)))
        })
        .collect()
}
