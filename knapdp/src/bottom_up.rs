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

//! This module implements the bottom-up solving strategy: the complete state
//! space of the instance is tabulated in dependency order and the optimum is
//! read off the last cell of the table.

use crate::instance::check;
use crate::InvalidInput;

/// Returns the maximum total value of any subset of the items whose total
/// weight does not exceed `capacity`, computed by eager tabulation.
///
/// The table holds one row per number of items under consideration and one
/// column per remaining capacity. Row `i` only ever depends on row `i - 1`,
/// so filling the rows in increasing order of `i` visits every state after
/// its dependencies. Cell `(i, w)` applies the usual recurrence: either item
/// `i` does not fit and the cell copies `(i - 1, w)`, or it does and the cell
/// takes the best of excluding it and including it. Every one of the
/// `(n + 1) * (W + 1)` states is materialized regardless of whether the
/// top-down decomposition would ever reach it, which is what makes this
/// strategy run in time and space proportional to `n * W`.
///
/// The table lives on the heap for the duration of this call only: no state
/// survives the return, and repeated calls with the same input are completely
/// independent.
///
/// # Examples:
/// ```
/// # use knapdp::*;
/// let weights = [1, 3, 4, 5];
/// let values  = [1, 4, 5, 7];
/// // packs the items of weight 3 and 4
/// assert_eq!(Ok(9), solve_bottom_up(&weights, &values, 7));
/// // with no capacity, nothing can be packed
/// assert_eq!(Ok(0), solve_bottom_up(&weights, &values, 0));
/// ```
pub fn solve_bottom_up(weights: &[isize], values: &[isize], capacity: isize) -> Result<isize, InvalidInput> {
    check(weights, values, capacity)?;

    let n = weights.len();
    let capacity = capacity as usize;
    let mut table = vec![vec![0_isize; capacity + 1]; n + 1];

    for i in 1..=n {
        let weight = weights[i - 1] as usize;
        let value = values[i - 1];
        for w in 0..=capacity {
            table[i][w] = if weight > w {
                table[i - 1][w]
            } else {
                table[i - 1][w].max(table[i - 1][w - weight] + value)
            };
        }
    }

    Ok(table[n][capacity])
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_bottom_up {
    use crate::{solve_bottom_up, InvalidInput};

    #[test]
    fn it_finds_the_known_optimum() {
        // the optimum packs the items of weight 3 and 4
        assert_eq!(Ok(9), solve_bottom_up(&[1, 3, 4, 5], &[1, 4, 5, 7], 7));
    }

    #[test]
    fn zero_capacity_packs_nothing() {
        assert_eq!(Ok(0), solve_bottom_up(&[1, 3, 4, 5], &[1, 4, 5, 7], 0));
    }

    #[test]
    fn no_items_means_no_value() {
        assert_eq!(Ok(0), solve_bottom_up(&[], &[], 0));
        assert_eq!(Ok(0), solve_bottom_up(&[], &[], 1000));
    }

    #[test]
    fn a_single_item_is_packed_iff_it_fits() {
        assert_eq!(Ok(42), solve_bottom_up(&[5], &[42], 5));
        assert_eq!(Ok(42), solve_bottom_up(&[5], &[42], 6));
        assert_eq!(Ok(0), solve_bottom_up(&[5], &[42], 4));
    }

    #[test]
    fn an_item_too_heavy_for_the_sack_is_never_packed() {
        assert_eq!(Ok(1), solve_bottom_up(&[100, 1], &[1000, 1], 10));
    }

    #[test]
    fn the_optimum_is_monotone_in_the_capacity() {
        let weights = [4, 2, 7, 3, 5];
        let values = [9, 3, 12, 5, 8];
        let mut previous = 0;
        for capacity in 0..=25 {
            let optimum = solve_bottom_up(&weights, &values, capacity).unwrap();
            assert!(optimum >= previous, "optimum dropped at capacity {capacity}");
            previous = optimum;
        }
    }

    #[test]
    fn repeated_calls_yield_the_same_optimum() {
        let weights = [2, 3, 5, 7];
        let values = [1, 5, 2, 4];
        let first = solve_bottom_up(&weights, &values, 10);
        let second = solve_bottom_up(&weights, &values, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            Err(InvalidInput::LengthMismatch { weights: 2, values: 3 }),
            solve_bottom_up(&[1, 2], &[1, 2, 3], 10)
        );
    }

    #[test]
    fn a_negative_capacity_is_rejected() {
        assert_eq!(
            Err(InvalidInput::NegativeCapacity(-5)),
            solve_bottom_up(&[1, 2], &[1, 2], -5)
        );
    }

    #[test]
    fn a_negative_weight_is_rejected() {
        assert_eq!(
            Err(InvalidInput::NegativeWeight { item: 0, weight: -1 }),
            solve_bottom_up(&[-1, 2], &[1, 2], 10)
        );
    }

    #[test]
    fn a_negative_value_is_rejected() {
        assert_eq!(
            Err(InvalidInput::NegativeValue { item: 1, value: -2 }),
            solve_bottom_up(&[1, 2], &[1, -2], 10)
        );
    }
}
