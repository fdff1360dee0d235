use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use karger_cut::cs::graph::{karger_min_cut_with_config, read_adjacency_list, KargerConfig};
use log::info;

/// Splits a graph along its minimum cut and prints the product of the two side sizes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Adjacency list, one `name: neighbour neighbour ...` record per line
    input: PathBuf,
    /// Known size of the minimum cut
    #[arg(short, long, default_value_t = 3)]
    cut_size: usize,
    /// Number of contraction runs before giving up
    #[arg(short, long)]
    max_attempts: Option<usize>,
    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
    /// Run attempts on all cores
    #[arg(short, long)]
    parallel: bool,
}

fn get_progressspinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed_precise}]") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let start = Instant::now();
    let graph = match read_adjacency_list(&args.input) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}: {}", args.input.display(), err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "loaded {} nodes and {} distinct edges in {:?}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        start.elapsed()
    );

    let config = KargerConfig {
        max_attempts: args.max_attempts,
        seed: args.seed,
        parallel: args.parallel,
    };
    let spinner = get_progressspinner("Searching for min cut");
    let start = Instant::now();
    let result = karger_min_cut_with_config(&graph, args.cut_size, &config);
    spinner.finish_and_clear();

    match result {
        Ok(cut) => {
            info!("search took {:?}", start.elapsed());
            println!("{}", cut.partition_product());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
