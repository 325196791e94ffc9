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

//! This module defines the representation of a knapsack instance along with
//! the validation of the input contract which is shared by both solving
//! strategies.

use crate::InvalidInput;

/// This structure represents one validated instance of the binary knapsack
/// problem: a set of items (each with a weight and a profit) and the capacity
/// of the sack. Instances built through `Knapsack::new` are guaranteed to
/// satisfy the input contract of the library, so the fields can be fed to the
/// solve functions directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    /// The total weight budget of the sack.
    pub capacity: isize,
    /// The profit of each item (what you earn by packing it).
    pub profit: Vec<isize>,
    /// The weight of each item (what it costs to pack it).
    pub weight: Vec<isize>,
}

impl Knapsack {
    /// Creates a validated instance from its raw parts. The `weight` and
    /// `profit` vectors must have the same length and every weight, profit
    /// and the capacity must be non negative.
    ///
    /// # Examples:
    /// ```
    /// # use knapdp::*;
    /// let instance = Knapsack::new(vec![1, 3, 4, 5], vec![1, 4, 5, 7], 7).unwrap();
    /// assert_eq!(4, instance.nb_items());
    ///
    /// assert!(Knapsack::new(vec![1, 2], vec![1], 7).is_err());
    /// ```
    pub fn new(weight: Vec<isize>, profit: Vec<isize>, capacity: isize) -> Result<Self, InvalidInput> {
        check(&weight, &profit, capacity)?;
        Ok(Knapsack { capacity, profit, weight })
    }

    /// The number of items of the instance.
    pub fn nb_items(&self) -> usize {
        self.weight.len()
    }
}

/// Verifies that the given raw input satisfies the contract of the library:
/// one value per weight, and no negative weight, value or capacity. Both
/// solving strategies call this before touching their table or memo, so an
/// ill formed input can never produce a bogus optimum.
pub(crate) fn check(weights: &[isize], values: &[isize], capacity: isize) -> Result<(), InvalidInput> {
    if weights.len() != values.len() {
        return Err(InvalidInput::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }
    if capacity < 0 {
        return Err(InvalidInput::NegativeCapacity(capacity));
    }
    for (item, &weight) in weights.iter().enumerate() {
        if weight < 0 {
            return Err(InvalidInput::NegativeWeight { item, weight });
        }
    }
    for (item, &value) in values.iter().enumerate() {
        if value < 0 {
            return Err(InvalidInput::NegativeValue { item, value });
        }
    }
    Ok(())
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
