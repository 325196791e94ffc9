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

//! # KNAPDP
//! Knapdp solves the binary knapsack problem to optimality with two
//! interchangeable dynamic programming strategies. The first one,
//! `solve_bottom_up`, tabulates the complete state space of the problem in
//! dependency order. The second one, `solve_top_down`, recursively decomposes
//! the problem from its root state and memoizes every subresult it computes,
//! which means it only ever visits the states that are actually reachable.
//!
//! Both strategies compute the exact same quantity: the maximum total profit
//! of any subset of the items whose total weight fits within the capacity of
//! the sack. Which of the two is faster depends on the shape of the instance,
//! and the companion `knapdp-bench` crate of this workspace exists precisely
//! to measure that tradeoff.
//!
//! ## Quick Example
//! The following snippet solves one small instance with both strategies. The
//! optimum packs the items of weight 3 and 4 for a profit of 9.
//! ```
//! use knapdp::*;
//!
//! let weights = [1, 3, 4, 5];
//! let values  = [1, 4, 5, 7];
//!
//! assert_eq!(Ok(9), solve_bottom_up(&weights, &values, 7));
//! assert_eq!(Ok(9), solve_top_down (&weights, &values, 7));
//! ```
//!
//! ## Input contract
//! The weights and values slices must have the same length, and all weights,
//! values and the capacity must be non negative. Any violation of that
//! contract is reported as an `InvalidInput` error by both strategies; there
//! is no other way for a solve to fail.

mod common;
mod errors;
mod instance;
mod bottom_up;
mod top_down;

pub use common::*;
pub use errors::*;
pub use instance::*;
pub use bottom_up::*;
pub use top_down::*;
