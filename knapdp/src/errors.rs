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

//! This module defines the error type that is reported when the input of a
//! solve violates the contract of the library.

/// This enumeration groups the ways in which the input of a solve can violate
/// the contract of the library. These are programming errors on the caller
/// side: they are never retried and simply propagate to the caller. A solve
/// that is handed a valid input cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// The weights and values slices do not describe the same set of items.
    #[error("weights and values must have the same length ({weights} != {values})")]
    LengthMismatch {
        /// The number of weights that were provided.
        weights: usize,
        /// The number of values that were provided.
        values: usize,
    },
    /// The capacity of the sack must be non negative.
    #[error("the capacity must be non negative (got {0})")]
    NegativeCapacity(isize),
    /// The weight of every item must be non negative.
    #[error("item {item} has a negative weight ({weight})")]
    NegativeWeight {
        /// The position of the offending item.
        item: usize,
        /// The weight of the offending item.
        weight: isize,
    },
    /// The value of every item must be non negative.
    #[error("item {item} has a negative value ({value})")]
    NegativeValue {
        /// The position of the offending item.
        item: usize,
        /// The value of the offending item.
        value: isize,
    },
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_invalid_input {
    use crate::InvalidInput;

    #[test]
    fn messages_name_the_violated_constraint() {
        let err = InvalidInput::LengthMismatch { weights: 3, values: 2 };
        assert_eq!(
            "weights and values must have the same length (3 != 2)",
            err.to_string()
        );

        let err = InvalidInput::NegativeCapacity(-7);
        assert_eq!("the capacity must be non negative (got -7)", err.to_string());

        let err = InvalidInput::NegativeWeight { item: 1, weight: -4 };
        assert_eq!("item 1 has a negative weight (-4)", err.to_string());

        let err = InvalidInput::NegativeValue { item: 0, value: -1 };
        assert_eq!("item 0 has a negative value (-1)", err.to_string());
    }
}
