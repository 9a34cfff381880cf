use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use prefixsum::{PrefixSumError, PrefixSumIndex};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prefixsum", about = "Binary-indexed prefix sums with O(log n) updates")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Seed positions 1..=size with their own index and run sample queries.
    Demo {
        /// Number of positions.
        #[arg(long, default_value_t = 10, allow_negative_numbers = true, value_parser = parse_size)]
        size: usize,
    },
    /// Build an index from explicit values and answer range queries.
    Query(QueryArgs),
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Comma-separated values for positions 1, 2, 3, ...
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
    values: Vec<i64>,
    /// Inclusive 1-based range `low:high`; may be repeated.
    #[arg(long = "range", value_parser = parse_range)]
    ranges: Vec<(usize, usize)>,
    /// Print the logical values as JSON after answering queries.
    #[cfg(feature = "visualize")]
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { size } => run_demo(size)?,
        Commands::Query(args) => run_query(args)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(size: usize) -> Result<()> {
    let mut index = PrefixSumIndex::new(size).context("failed to create index")?;
    for position in 1..=size {
        index
            .update(position, position as i64)
            .with_context(|| format!("failed to seed position {}", position))?;
    }
    info!(size, total = index.total(), "seeded demo index");

    println!(
        "prefix sum [1, 5]: {}",
        index.prefix_sum(5).context("prefix query failed")?
    );
    println!(
        "range sum [3, 7]: {}",
        index.range_sum(3, 7).context("range query failed")?
    );
    println!(
        "value at 4: {}",
        index.get(4).context("point query failed")?
    );

    index.update(5, 10).context("update of position 5 failed")?;
    println!(
        "after adding 10 at position 5, range sum [3, 7]: {}",
        index.range_sum(3, 7).context("range query failed")?
    );

    Ok(())
}

fn run_query(args: QueryArgs) -> Result<()> {
    let index =
        PrefixSumIndex::from_values(&args.values).context("failed to build index from values")?;
    debug!(size = index.size(), "index built");

    if args.ranges.is_empty() {
        println!("total [1, {}]: {}", index.size(), index.total());
    }
    for (low, high) in &args.ranges {
        let sum = index
            .range_sum(*low, *high)
            .with_context(|| format!("range query {}:{} failed", low, high))?;
        println!("range sum [{}, {}]: {}", low, high, sum);
    }

    #[cfg(feature = "visualize")]
    if args.json {
        let json = index
            .snapshot()
            .to_json()
            .context("failed to serialize snapshot")?;
        println!("{}", json);
    }

    Ok(())
}

fn parse_size(raw: &str) -> Result<usize> {
    let size: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid size '{}'", raw))?;
    if size <= 0 {
        return Err(PrefixSumError::InvalidSize.into());
    }
    usize::try_from(size).with_context(|| format!("size {} does not fit in usize", size))
}

fn parse_range(raw: &str) -> Result<(usize, usize)> {
    let (low, high) = raw
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("expected `low:high`, got '{}'", raw))?;
    let low = low
        .trim()
        .parse()
        .with_context(|| format!("invalid low bound '{}'", low))?;
    let high = high
        .trim()
        .parse()
        .with_context(|| format!("invalid high bound '{}'", high))?;
    Ok((low, high))
}
