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

//! This module defines the most basic data types that are shared by the two
//! solving strategies of this library.

// ----------------------------------------------------------------------------
// --- STATE ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type identifies one subproblem of a knapsack instance. The `depth`
/// tells how many of the leading items are still under consideration and the
/// `capacity` tells how much of the weight budget remains available for them.
/// The value of a state is the best profit obtainable using only the items
/// `1..depth` within that remaining budget.
///
/// In the bottom-up strategy, every state in `[0, n] x [0, W]` is materialized
/// in a dense table. In the top-down strategy, states are the keys of the memo
/// and only the reachable ones ever get instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// The number of leading items that may still be packed in the sack.
    pub depth: usize,
    /// The capacity that remains available for those items.
    pub capacity: isize,
}

impl State {
    /// This is the root state of an instance with `n` items: all items are
    /// still under consideration and the whole capacity is available.
    ///
    /// # Examples:
    /// ```
    /// # use knapdp::State;
    /// let root = State::root(4, 7);
    /// assert_eq!(4, root.depth);
    /// assert_eq!(7, root.capacity);
    /// ```
    pub fn root(n: usize, capacity: isize) -> Self {
        State { depth: n, capacity }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_state {
    use crate::State;

    #[test]
    fn root_considers_all_items_with_the_whole_budget() {
        let root = State::root(10, 300);
        assert_eq!(10, root.depth);
        assert_eq!(300, root.capacity);
    }

    #[test]
    fn states_are_identified_by_their_two_coordinates() {
        assert_eq!(State { depth: 3, capacity: 5 }, State { depth: 3, capacity: 5 });
        assert_ne!(State { depth: 3, capacity: 5 }, State { depth: 2, capacity: 5 });
        assert_ne!(State { depth: 3, capacity: 5 }, State { depth: 3, capacity: 4 });
    }
}
