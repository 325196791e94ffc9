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

//! This module generates the random knapsack instances that are fed to the
//! solvers during a measurement run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// This structure generates random knapsack instances from a seeded RNG. Two
/// generators built from the same seed produce the exact same sequence of
/// instances, which is what makes a measurement run reproducible.
pub struct Generator {
    rng: SmallRng,
}

impl Generator {
    /// Creates a generator seeded with the given value.
    pub fn new(seed: u64) -> Self {
        Generator { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Draws the weights and values of an instance with `n` items. Weights
    /// are uniform in `[1, weight_sup)` and values are uniform in `[1, 100)`.
    /// `weight_sup` must be at least 2 so that the weight range is not empty.
    pub fn instance(&mut self, n: usize, weight_sup: isize) -> (Vec<isize>, Vec<isize>) {
        let weights = (0..n).map(|_| self.rng.gen_range(1..weight_sup)).collect();
        let values = (0..n).map(|_| self.rng.gen_range(1..100)).collect();
        (weights, values)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_generator {
    use crate::generator::Generator;

    #[test]
    fn it_draws_the_requested_number_of_items() {
        let (weights, values) = Generator::new(42).instance(25, 150);
        assert_eq!(25, weights.len());
        assert_eq!(25, values.len());
    }

    #[test]
    fn weights_and_values_stay_within_their_ranges() {
        let (weights, values) = Generator::new(42).instance(500, 10);
        assert!(weights.iter().all(|&w| (1..10).contains(&w)));
        assert!(values.iter().all(|&v| (1..100).contains(&v)));
    }

    #[test]
    fn the_same_seed_draws_the_same_instances() {
        let mut a = Generator::new(7);
        let mut b = Generator::new(7);
        assert_eq!(a.instance(30, 150), b.instance(30, 150));
        assert_eq!(a.instance(10, 11), b.instance(10, 11));
    }

    #[test]
    fn different_seeds_draw_different_instances() {
        let (weights_a, _) = Generator::new(1).instance(100, 150);
        let (weights_b, _) = Generator::new(2).instance(100, 150);
        assert_ne!(weights_a, weights_b);
    }
}
