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

//! This module implements the three measurement scenarios. Each scenario
//! generates random instances, feeds them to both solving strategies strictly
//! sequentially, and records the elapsed wall clock time of every call. The
//! optimum itself is discarded: only the timings are consumed downstream.
//!
//! Every call is measured exactly once, with no warm up and no averaging.
//! This keeps a run short at the price of some measurement noise, which is an
//! accepted tradeoff for this tool.

use std::time::Instant;

use knapdp::{solve_bottom_up, solve_top_down, InvalidInput};
use serde::Serialize;

use crate::generator::Generator;

/// The timings of one comparative scenario: elapsed seconds per strategy,
/// indexed by `[item count][capacity]`. One instance is drawn per item count
/// and solved once per capacity.
#[derive(Debug, Clone, Serialize)]
pub struct ComparativeTimings {
    /// The item counts that were measured (one instance each).
    pub item_counts: Vec<usize>,
    /// The capacities each instance was solved with.
    pub capacities: Vec<isize>,
    /// Elapsed seconds of the bottom-up strategy.
    pub bottom_up: Vec<Vec<f64>>,
    /// Elapsed seconds of the top-down strategy.
    pub top_down: Vec<Vec<f64>>,
}

/// The timings of the representation growth scenario: one instance with a
/// fixed number of items, solved with capacities `2^1 .. 2^k` to probe how
/// the running time scales with the bit length of the capacity encoding.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthTimings {
    /// The (fixed) number of items of the measured instance.
    pub nb_items: usize,
    /// The capacities, i.e. the successive powers of two.
    pub capacities: Vec<isize>,
    /// Elapsed seconds of the bottom-up strategy.
    pub bottom_up: Vec<f64>,
    /// Elapsed seconds of the top-down strategy.
    pub top_down: Vec<f64>,
}

/// The general scenario: for each item count, weights are drawn uniformly
/// below half of the largest capacity, and the instance is solved with every
/// capacity of the list.
pub fn general(
    generator: &mut Generator,
    item_counts: &[usize],
    capacities: &[isize],
) -> Result<ComparativeTimings, InvalidInput> {
    let max_capacity = capacities.iter().copied().max().unwrap_or(0);
    // the weight range must hold at least the weight 1
    let weight_sup = (max_capacity / 2).max(2);
    comparative(generator, item_counts, capacities, weight_sup)
}

/// The low-weight scenario: identical to the general one except that weights
/// are drawn from `[1, 10]`. Low weights mean that the remaining capacity can
/// only take few distinct values, which lets the top-down strategy skip most
/// of the state space.
pub fn low_weight(
    generator: &mut Generator,
    item_counts: &[usize],
    capacities: &[isize],
) -> Result<ComparativeTimings, InvalidInput> {
    comparative(generator, item_counts, capacities, 11)
}

/// Measures one comparative scenario with the given weight range.
fn comparative(
    generator: &mut Generator,
    item_counts: &[usize],
    capacities: &[isize],
    weight_sup: isize,
) -> Result<ComparativeTimings, InvalidInput> {
    let mut bottom_up = vec![];
    let mut top_down = vec![];

    for &n in item_counts {
        let (weights, values) = generator.instance(n, weight_sup);
        let mut bottom_up_n = vec![];
        let mut top_down_n = vec![];

        for &capacity in capacities {
            bottom_up_n.push(timed(|| solve_bottom_up(&weights, &values, capacity))?);
            top_down_n.push(timed(|| solve_top_down(&weights, &values, capacity))?);
        }
        log::debug!("measured n = {n} over {} capacities", capacities.len());

        bottom_up.push(bottom_up_n);
        top_down.push(top_down_n);
    }

    Ok(ComparativeTimings {
        item_counts: item_counts.to_vec(),
        capacities: capacities.to_vec(),
        bottom_up,
        top_down,
    })
}

/// The representation growth scenario: a single instance with `nb_items`
/// items and weights drawn from `[1, 20)`, solved with every capacity
/// `2^1 .. 2^max_exponent`.
pub fn representation_growth(
    generator: &mut Generator,
    nb_items: usize,
    max_exponent: u32,
) -> Result<GrowthTimings, InvalidInput> {
    let capacities: Vec<isize> = (1..=max_exponent).map(|exp| 1_isize << exp).collect();
    let (weights, values) = generator.instance(nb_items, 20);

    let mut bottom_up = vec![];
    let mut top_down = vec![];
    for &capacity in capacities.iter() {
        bottom_up.push(timed(|| solve_bottom_up(&weights, &values, capacity))?);
        top_down.push(timed(|| solve_top_down(&weights, &values, capacity))?);
        log::debug!("measured capacity = {capacity}");
    }

    Ok(GrowthTimings { nb_items, capacities, bottom_up, top_down })
}

/// Runs one solve and returns the elapsed wall clock seconds, discarding the
/// optimum. An invalid input aborts the whole scenario.
fn timed<F: FnOnce() -> Result<isize, InvalidInput>>(solve: F) -> Result<f64, InvalidInput> {
    let start = Instant::now();
    solve()?;
    Ok(start.elapsed().as_secs_f64())
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_scenarios {
    use crate::generator::Generator;
    use crate::scenarios::{general, low_weight, representation_growth};

    #[test]
    fn general_yields_one_timing_per_strategy_per_cell() {
        let mut generator = Generator::new(0);
        let timings = general(&mut generator, &[2, 3], &[4, 8, 16]).unwrap();

        assert_eq!(vec![2, 3], timings.item_counts);
        assert_eq!(vec![4, 8, 16], timings.capacities);
        assert_eq!(2, timings.bottom_up.len());
        assert_eq!(2, timings.top_down.len());
        assert!(timings.bottom_up.iter().all(|row| row.len() == 3));
        assert!(timings.top_down.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn timings_are_finite_and_non_negative() {
        let mut generator = Generator::new(0);
        let timings = low_weight(&mut generator, &[5], &[10, 20]).unwrap();
        let mut all = timings.bottom_up.iter().chain(timings.top_down.iter()).flatten();
        assert!(all.all(|&t| t.is_finite() && t >= 0.0));
    }

    #[test]
    fn growth_measures_every_power_of_two() {
        let mut generator = Generator::new(0);
        let timings = representation_growth(&mut generator, 3, 4).unwrap();

        assert_eq!(3, timings.nb_items);
        assert_eq!(vec![2, 4, 8, 16], timings.capacities);
        assert_eq!(4, timings.bottom_up.len());
        assert_eq!(4, timings.top_down.len());
    }
}
