use clap::{Parser, Subcommand};
use log::{info, warn};
use online_colouring::{
    colour_by_name, config::parse_list, generate_k_colourable, growth_trends,
    improvements_over_first_fit, load_edges, load_results, logger, save_csv, save_edges,
    validate_coloring, verify_partition, Error, ExperimentConfig, ExperimentRunner, ResultRow,
    CBIP_RESULTS, CSV_COLUMNS, FIRST_FIT_RESULTS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

/// Online graph-colouring experiments: measures the competitive ratio of the
/// FirstFit heuristics, and of CBIP, on random k-colourable graphs.
///
/// Examples:
///  ./online-colouring run --quick
///  ./online-colouring run --n-values=50,100,200 --trials=50 --p=0.4
///  ./online-colouring generate --n-values=100 --k-values=2,3 --folder=graphs
///  ./online-colouring colour graphs/graph_k2_n100_idx0.edges --algorithm=cbip
///  ./online-colouring analyze --results-dir=results
///
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level, or a full log specification
    #[arg(short, long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Directory for (rotated) log files; logs to stderr when not given
    #[arg(long, value_name = "DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// Verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the FirstFit-family and CBIP experiments, and save CSV results
    Run {
        /// YAML experiment configuration; flags below override its values
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Comma-separated vertex-counts
        #[arg(long, value_name = "LIST")]
        n_values: Option<String>,

        /// Comma-separated chromatic numbers
        #[arg(long, value_name = "LIST")]
        k_values: Option<String>,

        /// Edge probability
        #[arg(short, long)]
        p: Option<f64>,

        /// Number of graphs per (k, n) combination
        #[arg(short = 'N', long, value_name = "NUM")]
        trials: Option<usize>,

        /// Random seed, for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Quick test mode (n = 50,100; k = 2,3; N = 20)
        #[arg(short, long)]
        quick: bool,

        /// Output directory for the CSV files
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Suppress progress messages
        #[arg(long)]
        quiet: bool,
    },

    /// Generate random k-colourable graphs, and save them as EDGES files
    Generate {
        /// Comma-separated vertex-counts
        #[arg(long, value_name = "LIST", default_value = "50,100")]
        n_values: String,

        /// Comma-separated chromatic numbers
        #[arg(long, value_name = "LIST", default_value = "2,3")]
        k_values: String,

        /// Edge probability
        #[arg(short, long, default_value = "0.3")]
        p: f64,

        /// Number of graphs per (k, n) combination
        #[arg(short = 'N', long, value_name = "NUM", default_value = "10")]
        count: usize,

        /// Random seed, for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "graphs")]
        folder: PathBuf,
    },

    /// Summarise previously saved experiment results
    Analyze {
        /// Directory holding the saved CSV results
        #[arg(short, long, value_name = "DIR", default_value = "results")]
        results_dir: PathBuf,
    },

    /// Colour a graph from an EDGES file, and validate the result
    Colour {
        /// EDGES file to load
        file: PathBuf,

        /// One of: random, degree, smallest-last, cbip
        #[arg(short, long, default_value = "random")]
        algorithm: String,

        /// Random seed for the presentation order
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn banner(title: &str) {
    println!("{}", "=".repeat(80));
    println!("{}", title);
    println!("{}", "=".repeat(80));
    println!();
}

/**
 *  Prints the rows as a table, with the ratios to four decimals.
 */
fn print_table(rows: &[ResultRow]) {
    println!("{}", CSV_COLUMNS.join(","));
    for r in rows {
        println!(
            "{},{},{},{},{:.4},{:.4},{:.4},{:.4}",
            r.algorithm, r.k, r.n, r.trials, r.avg_ratio, r.sd_ratio, r.min_ratio, r.max_ratio
        );
    }
}

fn print_improvements(ff_rows: &[ResultRow], cbip_rows: &[ResultRow]) {
    for (label, pct) in improvements_over_first_fit(ff_rows, cbip_rows) {
        println!("FirstFit vs {} (k=2):", label);
        println!("  Average improvement: {:.2}%\n", pct);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_experiments(
    config: Option<PathBuf>,
    n_values: Option<String>,
    k_values: Option<String>,
    p: Option<f64>,
    trials: Option<usize>,
    seed: Option<u64>,
    quick: bool,
    output_dir: Option<PathBuf>,
) -> Result<(), Error> {
    let mut cfg = match config {
        Some(path) => ExperimentConfig::load(path)?,
        None if quick => ExperimentConfig::quick(),
        None => ExperimentConfig::default(),
    };
    if !quick {
        if let Some(ns) = n_values {
            cfg.n_values = parse_list(&ns)?;
        }
        if let Some(ks) = k_values {
            cfg.k_values = parse_list(&ks)?;
        }
        if let Some(t) = trials {
            cfg.trials = t;
        }
    }
    if let Some(p) = p {
        cfg.p = p;
    }
    if let Some(seed) = seed {
        cfg.seed = seed;
    }
    if let Some(dir) = output_dir {
        cfg.output_dir = dir;
    }
    cfg.validate()?;

    banner("ONLINE GRAPH COLOURING EXPERIMENTS");
    println!("{}", cfg);

    let mut runner = ExperimentRunner::new(cfg.clone());

    banner("RUNNING FIRSTFIT EXPERIMENTS");
    let ff_rows = runner.run_first_fit_family()?;

    banner("RUNNING CBIP EXPERIMENTS (k = 2)");
    let cbip_rows = runner.run_cbip()?;

    banner("RESULTS: FIRSTFIT FAMILY");
    print_table(&ff_rows);
    println!();
    banner("RESULTS: CBIP (k=2)");
    print_table(&cbip_rows);
    println!();

    fs::create_dir_all(&cfg.output_dir)?;
    let ff_path = cfg.output_dir.join(FIRST_FIT_RESULTS);
    let cbip_path = cfg.output_dir.join(CBIP_RESULTS);
    save_csv(&ff_rows, &ff_path)?;
    save_csv(&cbip_rows, &cbip_path)?;

    banner("RESULTS SAVED");
    println!("  FirstFit family: {}", ff_path.display());
    println!("  CBIP:            {}", cbip_path.display());
    println!();

    banner("QUICK ANALYSIS");
    print_improvements(&ff_rows, &cbip_rows);
    Ok(())
}

fn analyze_results(results_dir: &Path) -> Result<(), Error> {
    banner("ANALYZING EXPERIMENT RESULTS");
    let (ff_rows, cbip_rows) = load_results(results_dir)?;
    println!("Loaded {} FirstFit family results", ff_rows.len());
    println!("Loaded {} CBIP results", cbip_rows.len());
    println!();

    banner("ANALYSIS SUMMARY");
    for growth in growth_trends(&ff_rows) {
        println!("{}", growth);
    }
    print_improvements(&ff_rows, &cbip_rows);
    Ok(())
}

fn generate_graphs(
    n_values: &str,
    k_values: &str,
    p: f64,
    count: usize,
    seed: Option<u64>,
    folder: &Path,
) -> Result<(), Error> {
    let (ns, ks) = (parse_list(n_values)?, parse_list(k_values)?);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    fs::create_dir_all(folder)?;

    let total = ns.len() * ks.len() * count;
    let mut done = 0;
    for &k in ks.iter() {
        for &n in ns.iter() {
            for idx in 0..count {
                let (graph, parts) = generate_k_colourable(n, k, p, &mut rng)?;
                verify_partition(&graph, &parts).map_err(|msg| {
                    Error::InvalidArgument(format!("Generated invalid graph: {}", msg))
                })?;
                let path = folder.join(format!("graph_k{}_n{}_idx{}.edges", k, n, idx));
                save_edges(&graph, &path)?;

                done += 1;
                if done % 100 == 0 {
                    info!("Generated {}/{} graphs", done, total);
                }
            }
        }
    }
    println!(
        "Successfully generated {} graphs in '{}/'",
        total,
        folder.display()
    );
    Ok(())
}

fn colour_file(file: &Path, algorithm: &str, seed: Option<u64>) -> Result<(), Error> {
    let graph = load_edges(file)?;
    info!(
        "Loaded graph: {} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    let colouring = colour_by_name(&graph, algorithm, seed)?;

    let verdict = validate_coloring(&graph, &colouring);
    if !verdict.is_valid() {
        warn!("{}", verdict);
        return Err(Error::InvalidColouring(verdict.to_string()));
    }
    println!("{}: {} colours ({})", algorithm, colouring.max_colour(), verdict);
    Ok(())
}

/**
 * Main entry-point into the online-colouring experiments.
 */
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();
    let quiet = matches!(args.command, Command::Run { quiet: true, .. });
    let default_level = if quiet { "warn" } else { "info" };
    let level: String = args.log_level.unwrap_or(default_level.to_string());
    let _logger = logger::configure(level.as_str(), args.verbose > 0, args.log_dir.as_deref())?;

    match args.command {
        Command::Run {
            config,
            n_values,
            k_values,
            p,
            trials,
            seed,
            quick,
            output_dir,
            quiet: _,
        } => run_experiments(
            config, n_values, k_values, p, trials, seed, quick, output_dir,
        )?,
        Command::Generate {
            n_values,
            k_values,
            p,
            count,
            seed,
            folder,
        } => generate_graphs(&n_values, &k_values, p, count, seed, &folder)?,
        Command::Analyze { results_dir } => analyze_results(&results_dir)?,
        Command::Colour {
            file,
            algorithm,
            seed,
        } => colour_file(&file, &algorithm, seed)?,
    }

    Ok(())
}
