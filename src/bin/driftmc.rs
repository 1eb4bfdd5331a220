use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use driftmc::simulation::DriftSimulation;
use driftmc::walk::{MetropolisWalk, TargetWeights};
use driftmc::XoshiroSource;

/// Driftmc: Monte Carlo sampling of allele-frequency dynamics
///
/// Runs replicated Wright-Fisher drift chains or a targeted Metropolis
/// random walk and prints the sampled states for downstream analysis.
#[derive(Parser, Debug)]
#[command(name = "driftmc")]
#[command(author, version, about = "Samples discrete allele-frequency dynamics", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel replicates
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run replicated Wright-Fisher drift chains.
    ///
    /// Prints one record per (replicate, generation) pair.
    Drift {
        /// Number of replicate chains
        #[arg(short, long, default_value = "1000")]
        replicates: usize,

        /// Haploid population size
        #[arg(short = 'n', long, default_value = "100")]
        population_size: u64,

        /// Generations per replicate
        #[arg(short, long, default_value = "20")]
        generations: usize,

        /// Initial focal-allele count (seeds the first draw, not emitted)
        #[arg(short = 'x', long, default_value = "30")]
        initial_count: u64,

        /// Random seed (default: seeded from entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,
    },

    /// Run a targeted Metropolis random walk.
    ///
    /// Prints the chain of visited states, starting from the initial
    /// position.
    Walk {
        /// Start position (must lie inside [left, right])
        #[arg(short, long)]
        init: i64,

        /// Number of Metropolis steps
        #[arg(short, long)]
        steps: usize,

        /// Left domain bound
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        left: i64,

        /// Right domain bound
        #[arg(long, default_value = "20", allow_hyphen_values = true)]
        right: i64,

        /// Comma-separated target weights, one per state (default: uniform)
        #[arg(short, long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,

        /// Random seed (default: seeded from entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Drift {
            replicates,
            population_size,
            generations,
            initial_count,
            seed,
            format,
        } => run_drift(
            replicates,
            population_size,
            generations,
            initial_count,
            seed,
            format,
        ),
        Commands::Walk {
            init,
            steps,
            left,
            right,
            weights,
            seed,
            format,
        } => run_walk(init, steps, left, right, weights, seed, format),
    }
}

fn run_drift(
    replicates: usize,
    population_size: u64,
    generations: usize,
    initial_count: u64,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let mut builder = DriftSimulation::builder()
        .replicates(replicates)
        .population_size(population_size)
        .generations(generations)
        .initial_count(initial_count);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }

    let mut sim = builder.build()?;
    let dataset = sim.run()?;

    match format {
        OutputFormat::Csv => {
            println!("rep,t,x");
            for record in dataset.records() {
                println!("{},{},{}", record.replicate, record.generation, record.count);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(dataset.records())?);
        }
    }
    Ok(())
}

fn run_walk(
    init: i64,
    steps: usize,
    left: i64,
    right: i64,
    weights: Option<Vec<f64>>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let target = match weights {
        Some(weights) => TargetWeights::new(left, right, weights)?,
        None => TargetWeights::uniform(left, right)?,
    };
    let walk = MetropolisWalk::new(target, init, steps)?;

    let mut rng = match seed {
        Some(seed) => XoshiroSource::seed_from_u64(seed),
        None => XoshiroSource::from_entropy(),
    };
    let chain = walk.sample(&mut rng);

    match format {
        OutputFormat::Csv => {
            println!("t,s");
            for (t, state) in chain.iter().enumerate() {
                println!("{t},{state}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&chain)?);
        }
    }
    Ok(())
}
