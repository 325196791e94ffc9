// Copyright 2020 Xavier Gillard
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

//! This module implements the top-down solving strategy: the optimum is
//! computed by recursive decomposition from the root state and every
//! subresult is memoized, so only the reachable states are ever visited.

use fxhash::FxHashMap;

use crate::instance::check;
use crate::{InvalidInput, State};

/// Returns the maximum total value of any subset of the items whose total
/// weight does not exceed `capacity`, computed by memoized recursion. This is
/// functionally equivalent to `solve_bottom_up`: for any valid input, both
/// strategies return the exact same optimum.
///
/// The decomposition starts from the root state `(n, capacity)` and recurses
/// towards the base states where either no item or no capacity remains. The
/// memo is consulted before recursing and written right after a state has
/// been computed, which guarantees that each distinct state is computed at
/// most once. Since the remaining capacity only ever decreases by the weight
/// of a packed item, instances whose weights take few distinct values reach
/// far fewer than `n * W` states, and this strategy then does proportionally
/// less work than the eager tabulation.
///
/// The recursion consumes one frame per item level, so its depth is bounded
/// by `n` (not by the capacity).
///
/// The memo lives for the duration of this call only: no state survives the
/// return, and repeated calls with the same input are completely independent.
///
/// # Examples:
/// ```
/// # use knapdp::*;
/// let weights = [1, 3, 4, 5];
/// let values  = [1, 4, 5, 7];
/// assert_eq!(solve_bottom_up(&weights, &values, 7), solve_top_down(&weights, &values, 7));
/// ```
pub fn solve_top_down(weights: &[isize], values: &[isize], capacity: isize) -> Result<isize, InvalidInput> {
    check(weights, values, capacity)?;

    let mut memo = FxHashMap::default();
    Ok(value_of(weights, values, State::root(weights.len(), capacity), &mut memo))
}

/// Computes (or fetches from the memo) the value of one state: the best
/// profit obtainable using only the items `1..depth` within the remaining
/// capacity of the state.
fn value_of(
    weights: &[isize],
    values: &[isize],
    state: State,
    memo: &mut FxHashMap<State, isize>,
) -> isize {
    if let Some(&value) = memo.get(&state) {
        return value;
    }

    let State { depth, capacity } = state;
    let value = if depth == 0 || capacity == 0 {
        0
    } else {
        let weight = weights[depth - 1];
        let exclude = value_of(weights, values, State { depth: depth - 1, capacity }, memo);
        if weight > capacity {
            exclude
        } else {
            let remainder = State { depth: depth - 1, capacity: capacity - weight };
            let include = value_of(weights, values, remainder, memo) + values[depth - 1];
            exclude.max(include)
        }
    };

    memo.insert(state, value);
    value
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_top_down {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{solve_bottom_up, solve_top_down, InvalidInput};

    #[test]
    fn it_finds_the_known_optimum() {
        // the optimum packs the items of weight 3 and 4
        assert_eq!(Ok(9), solve_top_down(&[1, 3, 4, 5], &[1, 4, 5, 7], 7));
    }

    #[test]
    fn zero_capacity_packs_nothing() {
        assert_eq!(Ok(0), solve_top_down(&[1, 3, 4, 5], &[1, 4, 5, 7], 0));
    }

    #[test]
    fn no_items_means_no_value() {
        assert_eq!(Ok(0), solve_top_down(&[], &[], 0));
        assert_eq!(Ok(0), solve_top_down(&[], &[], 1000));
    }

    #[test]
    fn a_single_item_is_packed_iff_it_fits() {
        assert_eq!(Ok(42), solve_top_down(&[5], &[42], 5));
        assert_eq!(Ok(42), solve_top_down(&[5], &[42], 6));
        assert_eq!(Ok(0), solve_top_down(&[5], &[42], 4));
    }

    #[test]
    fn the_optimum_is_monotone_in_the_capacity() {
        let weights = [4, 2, 7, 3, 5];
        let values = [9, 3, 12, 5, 8];
        let mut previous = 0;
        for capacity in 0..=25 {
            let optimum = solve_top_down(&weights, &values, capacity).unwrap();
            assert!(optimum >= previous, "optimum dropped at capacity {capacity}");
            previous = optimum;
        }
    }

    #[test]
    fn repeated_calls_yield_the_same_optimum() {
        let weights = [2, 3, 5, 7];
        let values = [1, 5, 2, 4];
        let first = solve_top_down(&weights, &values, 10);
        let second = solve_top_down(&weights, &values, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn it_agrees_with_the_tabulation_on_random_instances() {
        let mut rng = SmallRng::seed_from_u64(0xd0);
        for _ in 0..50 {
            let n = rng.gen_range(0..=15);
            let capacity = rng.gen_range(0..150);
            let weights: Vec<isize> = (0..n).map(|_| rng.gen_range(1..75)).collect();
            let values: Vec<isize> = (0..n).map(|_| rng.gen_range(1..100)).collect();

            assert_eq!(
                solve_bottom_up(&weights, &values, capacity),
                solve_top_down(&weights, &values, capacity),
                "strategies disagree on weights={weights:?} values={values:?} capacity={capacity}"
            );
        }
    }

    #[test]
    fn it_agrees_with_the_tabulation_when_weights_are_low() {
        // low weights make the recursion revisit the same states over and
        // over, which is exactly what the memo is there for
        let mut rng = SmallRng::seed_from_u64(0xd1);
        for _ in 0..50 {
            let n = rng.gen_range(1..=25);
            let capacity = rng.gen_range(0..300);
            let weights: Vec<isize> = (0..n).map(|_| rng.gen_range(1..=10)).collect();
            let values: Vec<isize> = (0..n).map(|_| rng.gen_range(1..100)).collect();

            assert_eq!(
                solve_bottom_up(&weights, &values, capacity),
                solve_top_down(&weights, &values, capacity),
                "strategies disagree on weights={weights:?} values={values:?} capacity={capacity}"
            );
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            Err(InvalidInput::LengthMismatch { weights: 2, values: 3 }),
            solve_top_down(&[1, 2], &[1, 2, 3], 10)
        );
    }

    #[test]
    fn a_negative_capacity_is_rejected() {
        assert_eq!(
            Err(InvalidInput::NegativeCapacity(-5)),
            solve_top_down(&[1, 2], &[1, 2], -5)
        );
    }

    #[test]
    fn a_negative_weight_is_rejected() {
        assert_eq!(
            Err(InvalidInput::NegativeWeight { item: 0, weight: -1 }),
            solve_top_down(&[-1, 2], &[1, 2], 10)
        );
    }

    #[test]
    fn a_negative_value_is_rejected() {
        assert_eq!(
            Err(InvalidInput::NegativeValue { item: 1, value: -2 }),
            solve_top_down(&[1, 2], &[1, -2], 10)
        );
    }
}
