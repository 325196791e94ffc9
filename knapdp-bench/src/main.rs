// Copyright 2022 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This is the main entry point of the program. This is what gets compiled to
//! the knapdp-bench binary.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use knapdp::{solve_bottom_up, solve_top_down, InvalidInput};

use crate::generator::Generator;

mod chart;
mod generator;
mod io_utils;
mod report;
mod scenarios;

/// Knapdp-bench is a tool that empirically compares the running time of the
/// two dynamic programming strategies of the knapdp library: the bottom-up
/// tabulation and the top-down memoized recursion.
///
/// It measures three scenarios (general random weights, low weights, and
/// exponentially growing capacities), renders one chart per scenario along
/// with the raw timings, and can also solve a single instance file with both
/// strategies.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
enum Args {
    /// Runs the three measurement scenarios and writes their artifacts.
    Bench(BenchArgs),
    /// Solves one knapsack instance file with both strategies.
    Solve(SolveArgs),
}

#[derive(clap::Args, Debug)]
struct BenchArgs {
    /// The directory where the charts and the raw timings are written.
    #[clap(short, long, default_value = ".")]
    output: PathBuf,
    /// The seed of the instance generator. Two runs with the same seed and
    /// the same parameters measure the exact same instances.
    #[clap(short, long, default_value_t = 0)]
    seed: u64,
    /// The item counts of the two comparative scenarios.
    #[clap(long, value_delimiter = ',', default_values_t = vec![10, 20, 30, 40, 50])]
    item_counts: Vec<usize>,
    /// The capacities of the two comparative scenarios.
    #[clap(long, value_delimiter = ',', default_values_t = vec![50, 100, 200, 300])]
    capacities: Vec<isize>,
    /// The (fixed) number of items of the representation growth scenario.
    #[clap(long, default_value_t = 20)]
    growth_items: usize,
    /// The growth scenario uses the capacities 2^1 up to 2^max-exponent.
    #[clap(long, default_value_t = 10)]
    max_exponent: u32,
}

#[derive(clap::Args, Debug)]
struct SolveArgs {
    /// The path to the knapsack instance that needs to be solved.
    instance: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    match Args::parse() {
        Args::Bench(args) => bench(args),
        Args::Solve(args) => solve(args),
    }
}

fn bench(args: BenchArgs) -> anyhow::Result<()> {
    let mut generator = Generator::new(args.seed);

    log::info!("measuring the general scenario");
    let general = scenarios::general(&mut generator, &args.item_counts, &args.capacities)?;
    log::info!("measuring the low weight scenario");
    let low_weight = scenarios::low_weight(&mut generator, &args.item_counts, &args.capacities)?;
    log::info!("measuring the representation growth scenario");
    let growth = scenarios::representation_growth(&mut generator, args.growth_items, args.max_exponent)?;

    report::save_all(&args.output, &general, &low_weight, &growth)?;
    println!("seed     : {}", args.seed);
    println!("artifacts: {}", args.output.display());
    Ok(())
}

type Solve = fn(&[isize], &[isize], isize) -> Result<isize, InvalidInput>;

fn solve(args: SolveArgs) -> anyhow::Result<()> {
    let instance = io_utils::read_instance(&args.instance)?;
    let name = instance_name(&args.instance);

    let strategies: [(&str, Solve); 2] =
        [("bottom-up", solve_bottom_up), ("top-down", solve_top_down)];
    for (strategy, solve) in strategies {
        let start = Instant::now();
        let optimum = solve(&instance.weight, &instance.profit, instance.capacity)?;
        let duration = start.elapsed();

        println!("instance : {name}");
        println!("strategy : {strategy}");
        println!("optimum  : {optimum}");
        println!("duration : {}", duration.as_secs_f32());
    }
    Ok(())
}

fn instance_name<P: AsRef<Path>>(fname: P) -> String {
    fname
        .as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("-- unknown --")
        .to_string()
}
